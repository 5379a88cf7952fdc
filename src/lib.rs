//! numlab-rs: Numerical Methods Lab
//!
//! Two independent, stateless numerical utilities:
//!
//! 1. **Root finding** — locate x such that f(x) ≈ 0 for a quadratic
//!    f(x) = a·x² + b·x + c, by bisection (bracketing) or Newton-Raphson
//!    (derivative-based) iteration.
//!
//! 2. **ODE integration** — advance a driven, damped pendulum state
//!    (θ, ω) across N fixed time steps, by a trapezoidal predictor-corrector
//!    or the classical fourth-order Runge-Kutta scheme, producing the full
//!    trajectory.
//!
//! # Architecture
//!
//! The crate separates **models** from **methods**:
//!
//! - Models define equations (what to solve): [`models::QuadraticModel`],
//!   [`models::PendulumModel`]
//! - Solvers provide methods (how to solve them): [`roots`], [`integrate`]
//!
//! The two utilities never call each other and carry no shared state. Every
//! entry point is a pure function of its inputs: identical inputs produce
//! bit-identical results (deterministic floating-point arithmetic, no
//! randomness, no I/O in the core).
//!
//! # Quick Start
//!
//! ```rust
//! use numlab_rs::models::{PendulumModel, PendulumState, QuadraticModel};
//! use numlab_rs::roots::{bisect, RootConfig};
//! use numlab_rs::integrate::{Integrator, IntegrationConfig, RK4Integrator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Root finding: f(x) = x² - 4x - 5 has roots at -1 and 5
//! let quadratic = QuadraticModel::new(1.0, -4.0, -5.0)?;
//! let result = bisect(&quadratic, -2.0, 0.0, &RootConfig::default())?;
//! assert!((result.root + 1.0).abs() < 1e-3);
//!
//! // 2. ODE integration: undamped, undriven nonlinear pendulum
//! let model = PendulumModel::undriven(1.0, 1.0)?;
//! let state0 = PendulumState::new(3.1, 0.0);
//! let config = IntegrationConfig::new(0.01, 1000);
//!
//! let trajectory = RK4Integrator::new().integrate(&model, state0, &config)?;
//! assert_eq!(trajectory.len(), 1001);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`models`]: Equation definitions (quadratic, pendulum)
//! - [`roots`]: Root-finding methods (bisection, Newton-Raphson)
//! - [`integrate`]: Time integrators (trapezoidal, Runge-Kutta 4)
//! - [`output`]: Result visualization and export
//!
//! # Error Handling
//!
//! Core routines return typed errors ([`roots::RootError`],
//! [`integrate::IntegrationError`]) and never retry: both components are
//! deterministic, so re-running with identical inputs is pointless. Choosing
//! a new bracket, a new initial guess, or a smaller step is the caller's
//! decision, not the core's.

// Core modules
pub mod models;

pub mod integrate;
pub mod roots;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use numlab_rs::prelude::*;
    //! ```
    pub use crate::models::{PendulumModel,
                            PendulumState,
                            QuadraticModel};
    pub use crate::roots::{bisect,
                           newton_raphson,
                           RootConfig,
                           RootError,
                           RootResult};
    pub use crate::integrate::{IntegrationConfig,
                               IntegrationError,
                               Integrator,
                               RK4Integrator,
                               Trajectory,
                               TrapezoidalIntegrator};
}
