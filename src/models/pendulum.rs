//! Driven, damped pendulum model
//!
//! Equation of motion for a pendulum of length L under gravity g, with
//! linear damping k, a periodic driving force of amplitude A and phase
//! rate φ:
//!
//! ```text
//! dθ/dt = ω
//! dω/dt = restoring(θ) - k·ω + A·cos(φ·t)
//! ```
//!
//! where the restoring term is `-(g/L)·sin θ` in the full nonlinear form,
//! or `-(g/L)·θ` under the small-angle approximation (valid only for small
//! displacements).
//!
//! The physical constants that drive this equation are **fields of the
//! model**, not module-level globals: every integration run is fully
//! self-contained and testable in isolation.

use crate::integrate::IntegrationError;

// =================================================================================================
// Pendulum State
// =================================================================================================

/// Instantaneous pendulum state: angle, angular velocity, and time
///
/// A plain `Copy` value. The integrators never mutate a state in place —
/// each step produces a new state from the previous one, so a trajectory is
/// a sequence of independent snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumState {
    /// Angle θ from the vertical (radians)
    pub theta: f64,

    /// Angular velocity ω = dθ/dt (rad/s)
    pub omega: f64,

    /// Simulation time t (seconds)
    pub time: f64,
}

impl PendulumState {
    /// Create an initial state at t = 0
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega, time: 0.0 }
    }

    /// Create a state at an explicit time
    pub fn at_time(theta: f64, omega: f64, time: f64) -> Self {
        Self { theta, omega, time }
    }

    /// Check all components are finite
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite() && self.time.is_finite()
    }

    /// Total mechanical energy for the **linear, unit** pendulum
    /// (g = L = 1, small-angle): E = ½ω² + ½θ²
    ///
    /// Only meaningful for that configuration; used to measure the energy
    /// drift of the integrators on a conservative system.
    pub fn linear_energy(&self) -> f64 {
        0.5 * self.omega * self.omega + 0.5 * self.theta * self.theta
    }
}

// =================================================================================================
// Pendulum Model
// =================================================================================================

/// Physical parameters of a driven, damped pendulum
///
/// Immutable for the duration of one integration run. Construction
/// validates that every parameter is finite and that the length is
/// non-zero (it divides the restoring term).
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::PendulumModel;
///
/// // Undamped, undriven, nonlinear pendulum with g = L = 1
/// let free = PendulumModel::undriven(1.0, 1.0).unwrap();
///
/// // Damped and driven
/// let driven = PendulumModel::driven(0.5, 1.2, 0.6667, 9.81, 1.0).unwrap();
///
/// // At θ = 0, ω = 0 the free pendulum feels no force
/// assert_eq!(free.acceleration(0.0, 0.0, 0.0), 0.0);
/// // The driven one feels the full driving amplitude at t = 0
/// assert_eq!(driven.acceleration(0.0, 0.0, 0.0), 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumModel {
    /// Damping coefficient k
    pub damping: f64,

    /// Driving force amplitude A
    pub amplitude: f64,

    /// Driving phase rate φ (the force is A·cos(φ·t))
    pub phase_rate: f64,

    /// Gravitational acceleration g
    pub gravity: f64,

    /// Pendulum length L
    pub length: f64,

    /// Use the small-angle approximation sin θ ≈ θ
    ///
    /// When true the restoring force is linear, -(g/L)·θ; when false it is
    /// the full -(g/L)·sin θ.
    pub small_angle: bool,
}

impl PendulumModel {
    /// Create a model with all parameters explicit
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::InvalidParameter`] if any parameter is
    /// non-finite or the length is zero.
    pub fn new(
        damping: f64,
        amplitude: f64,
        phase_rate: f64,
        gravity: f64,
        length: f64,
        small_angle: bool,
    ) -> Result<Self, IntegrationError> {
        for (name, value) in [
            ("damping", damping),
            ("amplitude", amplitude),
            ("phase_rate", phase_rate),
            ("gravity", gravity),
            ("length", length),
        ] {
            if !value.is_finite() {
                return Err(IntegrationError::InvalidParameter {
                    reason: format!("{} is not finite ({})", name, value),
                });
            }
        }

        if length == 0.0 {
            return Err(IntegrationError::InvalidParameter {
                reason: "length must be non-zero".to_string(),
            });
        }

        Ok(Self {
            damping,
            amplitude,
            phase_rate,
            gravity,
            length,
            small_angle,
        })
    }

    /// Free nonlinear pendulum: no damping, no driving force
    pub fn undriven(gravity: f64, length: f64) -> Result<Self, IntegrationError> {
        Self::new(0.0, 0.0, 0.0, gravity, length, false)
    }

    /// Damped, driven nonlinear pendulum
    pub fn driven(
        damping: f64,
        amplitude: f64,
        phase_rate: f64,
        gravity: f64,
        length: f64,
    ) -> Result<Self, IntegrationError> {
        Self::new(damping, amplitude, phase_rate, gravity, length, false)
    }

    /// Switch the small-angle (linear) approximation on or off
    pub fn with_small_angle(mut self, small_angle: bool) -> Self {
        self.small_angle = small_angle;
        self
    }

    /// Angular acceleration dω/dt at a given (θ, ω, t)
    ///
    /// ```text
    /// dω/dt = restoring(θ) - k·ω + A·cos(φ·t)
    /// ```
    ///
    /// This is the single derivative function shared by every integration
    /// scheme: both stages of the trapezoidal step and all four RK4 stages
    /// call it with their own intermediate estimates.
    pub fn acceleration(&self, theta: f64, omega: f64, time: f64) -> f64 {
        let damping_term = -self.damping * omega;
        let driving_force = self.amplitude * (self.phase_rate * time).cos();

        let restoring = if self.small_angle {
            -(self.gravity / self.length) * theta
        } else {
            -(self.gravity / self.length) * theta.sin()
        };

        restoring + damping_term + driving_force
    }
}

// =================================================================================================
// Tests
// =================================================================================================
