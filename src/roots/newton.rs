//! Newton-Raphson root finding
//!
//! # Mathematical Background
//!
//! From an initial guess x₀, each iteration follows the tangent line down
//! to its zero crossing:
//!
//! ```text
//! x ← x - f(x) / f'(x)
//! ```
//!
//! Near a simple root the error roughly squares each iteration — quadratic
//! convergence, far faster than bisection's one bit per step.
//!
//! # Characteristics
//!
//! - **Convergence**: Quadratic near a simple root
//! - **Cost**: 1 function + 1 derivative evaluation per iteration
//! - **Failure mode**: Undefined wherever f'(x) = 0 — for a quadratic that
//!   is the vertex, where the tangent is horizontal and never crosses zero
//!
//! # When to Use
//!
//! - A reasonable initial guess is available and speed matters
//! - The derivative is known analytically (it is, for a quadratic)
//!
//! When no guess is available but a sign-changing bracket is, prefer
//! [`bisect`](crate::roots::bisect).

use crate::models::QuadraticModel;
use crate::roots::{RootConfig, RootError, RootResult};

/// Derivative magnitude below which the Newton update is treated as
/// division by zero.
///
/// Quadratic coefficients are well scaled in this crate's use, so an
/// absolute guard suffices; a derivative this small only occurs at (or
/// numerically on top of) the vertex.
const DERIVATIVE_GUARD: f64 = 1e-12;

/// Find a root of `model` by Newton-Raphson iteration from `x0`
///
/// # Preconditions
///
/// `f'(x) != 0` at every iterate encountered. The iteration fails with
/// [`RootError::ZeroDerivative`] as soon as the derivative magnitude drops
/// below an absolute guard of `1e-12` — at that point the update step is
/// numerically undefined.
///
/// # Algorithm
///
/// Standard Newton update `x ← x - f(x)/f'(x)` while `|f(x)| > tolerance`,
/// capped at `config.max_iterations`.
///
/// # Errors
///
/// - [`RootError::InvalidParameter`] — non-finite guess or invalid config
/// - [`RootError::ZeroDerivative`] — derivative vanished at an iterate
/// - [`RootError::NonConvergence`] — iteration cap exceeded
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::QuadraticModel;
/// use numlab_rs::roots::{newton_raphson, RootConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = QuadraticModel::new(1.0, -4.0, -5.0)?;
///
/// let result = newton_raphson(&f, -5.0, &RootConfig::default())?;
/// assert!((result.root + 1.0).abs() < 1e-3);
/// assert!(result.iterations <= 7);
/// # Ok(())
/// # }
/// ```
pub fn newton_raphson(
    model: &QuadraticModel,
    x0: f64,
    config: &RootConfig,
) -> Result<RootResult, RootError> {

    // ====== Step 1: Validation ======

    config.validate()?;

    if !x0.is_finite() {
        return Err(RootError::InvalidParameter {
            reason: format!("initial guess must be finite, got {}", x0),
        });
    }

    // ====== Step 2: Newton Loop ======

    let mut x = x0;
    let mut f_x = model.evaluate(x);

    let mut iterates = Vec::with_capacity(8);
    iterates.push(x);

    let mut iterations = 0;

    while f_x.abs() > config.tolerance {
        if iterations >= config.max_iterations {
            return Err(RootError::NonConvergence {
                iterations,
                best_x: x,
                best_residual: f_x.abs(),
            });
        }

        let f_prime_x = model.derivative(x);
        if f_prime_x.abs() < DERIVATIVE_GUARD {
            return Err(RootError::ZeroDerivative {
                x,
                derivative: f_prime_x,
                iterations,
            });
        }

        iterations += 1;
        x -= f_x / f_prime_x;
        f_x = model.evaluate(x);
        iterates.push(x);
    }

    // ====== Step 3: Build Result ======

    Ok(RootResult {
        root: x,
        iterations,
        residual: f_x.abs(),
        iterates,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
