//! Time integrators for the pendulum equation of motion
//!
//! This module provides the [`Integrator`] trait and two explicit
//! fixed-step implementations:
//!
//! - **[`TrapezoidalIntegrator`]** — two-stage predictor-corrector
//!   (Heun's method), second-order accurate
//! - **[`RK4Integrator`]** — classical four-stage Runge-Kutta,
//!   fourth-order accurate
//!
//! # Architecture
//!
//! The model provides the physics (the derivative function
//! [`PendulumModel::acceleration`](crate::models::PendulumModel::acceleration)),
//! the integrator provides the numerics (the stepping scheme). The same
//! model runs under either scheme; the same scheme runs any model
//! configuration. Integrators are stateless `Copy` values — nothing is
//! carried between independent calls, so a run is restartable from any
//! stored state.
//!
//! # Output Contract
//!
//! `integrate` with `steps = N` returns a [`Trajectory`] of exactly `N + 1`
//! states, the initial state included, with `time = step · dt` computed
//! from the step index rather than accumulated (accumulating `t += dt`
//! collects rounding error; `0.1` is not exactly representable in binary).
//!
//! # Example
//!
//! ```rust
//! use numlab_rs::models::{PendulumModel, PendulumState};
//! use numlab_rs::integrate::{Integrator, IntegrationConfig, RK4Integrator, TrapezoidalIntegrator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let model = PendulumModel::undriven(1.0, 1.0)?;
//! let state0 = PendulumState::new(3.1, 0.0);
//! let config = IntegrationConfig::new(0.01, 1000);
//!
//! // Same scenario, two methods
//! let heun = TrapezoidalIntegrator::new().integrate(&model, state0, &config)?;
//! let rk4 = RK4Integrator::new().integrate(&model, state0, &config)?;
//!
//! assert_eq!(heun.len(), rk4.len());
//! # Ok(())
//! # }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod error;
pub mod rk4;
pub mod sweep;
pub mod trapezoidal;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use error::IntegrationError;
pub use rk4::RK4Integrator;
pub use sweep::integrate_sweep;
pub use trapezoidal::TrapezoidalIntegrator;

use nalgebra::DVector;

use crate::models::{PendulumModel, PendulumState};

// =================================================================================================
// Integration Configuration
// =================================================================================================

/// Configuration for a fixed-step integration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationConfig {
    /// Time step size dt (seconds)
    pub dt: f64,

    /// Number of steps to take; the trajectory holds `steps + 1` states
    pub steps: usize,
}

impl IntegrationConfig {
    /// Create a configuration from a step size and step count
    pub fn new(dt: f64, steps: usize) -> Self {
        Self { dt, steps }
    }

    /// Validate that the parameters are usable
    ///
    /// `steps = 0` is legal — the run returns only the initial state.
    pub fn validate(&self) -> Result<(), IntegrationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(IntegrationError::InvalidParameter {
                reason: format!("dt must be positive and finite, got {}", self.dt),
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Trajectory
// =================================================================================================

/// Time-ordered sequence of pendulum states produced by one integration run
///
/// Owns the full sequence (not just the final value) so the reporting
/// boundary can chart the time evolution. Accessors return nalgebra
/// vectors for convenient norm and component-wise arithmetic in analysis
/// code.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<PendulumState>,
}

impl Trajectory {
    /// Build a trajectory from a complete state sequence
    pub(crate) fn new(states: Vec<PendulumState>) -> Self {
        Self { states }
    }

    /// Number of states, initial state included
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when the trajectory holds no states
    ///
    /// Never the case for integrator output (the initial state is always
    /// present), but kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// All states in time order
    pub fn states(&self) -> &[PendulumState] {
        &self.states
    }

    /// Final state of the run
    pub fn final_state(&self) -> &PendulumState {
        self.states.last().expect("trajectory always holds the initial state")
    }

    /// Time values as a column vector
    pub fn times(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.time))
    }

    /// Angle values as a column vector
    pub fn thetas(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.theta))
    }

    /// Angular velocity values as a column vector
    pub fn omegas(&self) -> DVector<f64> {
        DVector::from_iterator(self.states.len(), self.states.iter().map(|s| s.omega))
    }

    /// Maximum absolute drift of the linear-pendulum energy ½ω² + ½θ²
    /// relative to the initial state
    ///
    /// Only meaningful for the conservative linear unit configuration
    /// (k = 0, A = 0, g = L = 1, small-angle); used to compare integrator
    /// quality.
    pub fn linear_energy_drift(&self) -> f64 {
        let initial = self.states[0].linear_energy();
        self.states
            .iter()
            .map(|s| (s.linear_energy() - initial).abs())
            .fold(0.0, f64::max)
    }
}

// =================================================================================================
// Integrator Trait
// =================================================================================================

/// Trait for fixed-step time integrators
///
/// # Responsibility
///
/// Advances a [`PendulumState`] across `config.steps` steps of size
/// `config.dt` under a [`PendulumModel`], producing the full trajectory.
/// The integrator owns the numerics only; all physics goes through
/// `model.acceleration`.
///
/// # Purity
///
/// Implementations are deterministic and side-effect free: identical
/// (model, state, config) inputs yield bit-identical trajectories.
pub trait Integrator {
    /// Integrate the pendulum equation of motion
    ///
    /// # Errors
    ///
    /// - [`IntegrationError::InvalidParameter`] — bad config or non-finite
    ///   initial state
    /// - [`IntegrationError::NonFiniteState`] — NaN/Inf appeared mid-run
    fn integrate(
        &self,
        model: &PendulumModel,
        state0: PendulumState,
        config: &IntegrationConfig,
    ) -> Result<Trajectory, IntegrationError>;

    /// Name of the method (used for display and metadata)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Validate a freshly computed state for numerical blow-up
///
/// NaN can arise from 0/0 or Inf − Inf, Inf from overflow. Either one
/// poisons every subsequent step, so the run is aborted at the first
/// occurrence with the step index for diagnosis.
pub(crate) fn validate_state(
    state: &PendulumState,
    step: usize,
) -> Result<(), IntegrationError> {
    if state.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::NonFiniteState {
            step,
            theta: state.theta,
            omega: state.omega,
        })
    }
}

/// Shared entry validation for both integrators
pub(crate) fn validate_inputs(
    state0: &PendulumState,
    config: &IntegrationConfig,
) -> Result<(), IntegrationError> {
    config.validate()?;

    if !state0.is_finite() {
        return Err(IntegrationError::InvalidParameter {
            reason: format!(
                "initial state must be finite, got theta = {}, omega = {}, time = {}",
                state0.theta, state0.omega, state0.time
            ),
        });
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
