//! Equation models
//!
//! A model encapsulates the equations of a problem — and nothing else.
//! Models evaluate; solvers iterate. This separation allows the same model
//! to be handed to different numerical methods:
//!
//! - [`QuadraticModel`] is consumed by both root finders in
//!   [`roots`](crate::roots) (bisection brackets it, Newton-Raphson also
//!   uses its analytic derivative).
//! - [`PendulumModel`] is consumed by both time integrators in
//!   [`integrate`](crate::integrate) through its single shared derivative
//!   function, [`PendulumModel::acceleration`].
//!
//! All models are immutable once constructed and validate their parameters
//! at construction time, so the solvers can assume finite coefficients
//! throughout.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod pendulum;
pub mod quadratic;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use pendulum::{PendulumModel, PendulumState};
pub use quadratic::QuadraticModel;
