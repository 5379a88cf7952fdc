//! Bisection root finding
//!
//! # Mathematical Background
//!
//! Given an interval whose endpoint residuals straddle zero, the
//! intermediate value theorem guarantees a root inside it. Each iteration
//! evaluates f at the midpoint and keeps whichever half preserves the sign
//! bracket, halving the interval width:
//!
//! ```text
//! width_n = width_0 / 2ⁿ
//! ```
//!
//! # Characteristics
//!
//! - **Convergence**: Linear — one binary digit of the root per iteration
//! - **Robustness**: Cannot diverge while the bracket is valid
//! - **Cost**: 1 function evaluation per iteration
//! - **Requirement**: A sign-changing bracket; no derivative needed
//!
//! # When to Use
//!
//! - A bracket is known and reliability matters more than speed
//! - The derivative is unavailable or untrusted
//!
//! For fast convergence from a good initial guess, prefer
//! [`newton_raphson`](crate::roots::newton_raphson).

use crate::models::QuadraticModel;
use crate::roots::{RootConfig, RootError, RootResult};

/// Find a root of `model` inside the bracket [x_lo, x_hi]
///
/// # Preconditions
///
/// The endpoint residuals must strictly straddle zero: one of
/// `f(x_lo)`, `f(x_hi)` negative and the other positive. A bracket whose
/// residuals share a sign (or where either endpoint sits exactly on zero)
/// fails with [`RootError::InvalidBracket`].
///
/// The update rule tracks which *side* carries the negative residual, so
/// either orientation of the bracket is accepted — the endpoints are
/// normalized by sign before the loop starts.
///
/// # Algorithm
///
/// Repeatedly computes the midpoint, evaluates f there, and narrows
/// whichever half preserves the sign bracket, while
/// `|f(midpoint)| > tolerance`. An exactly-zero midpoint residual stops
/// immediately via the tolerance check (0 ≤ tolerance always). The loop is
/// capped at `config.max_iterations`.
///
/// # Errors
///
/// - [`RootError::InvalidParameter`] — non-finite endpoint or invalid config
/// - [`RootError::InvalidBracket`] — endpoint residuals do not straddle zero
/// - [`RootError::NonConvergence`] — iteration cap exceeded
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::QuadraticModel;
/// use numlab_rs::roots::{bisect, RootConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let f = QuadraticModel::new(1.0, -4.0, -5.0)?;
///
/// let result = bisect(&f, 4.0, 6.0, &RootConfig::default())?;
/// assert!((result.root - 5.0).abs() < 1e-3);
/// assert!(result.residual <= 1e-4);
/// # Ok(())
/// # }
/// ```
pub fn bisect(
    model: &QuadraticModel,
    x_lo: f64,
    x_hi: f64,
    config: &RootConfig,
) -> Result<RootResult, RootError> {

    // ====== Step 1: Validation ======

    config.validate()?;

    if !x_lo.is_finite() || !x_hi.is_finite() {
        return Err(RootError::InvalidParameter {
            reason: format!("bracket endpoints must be finite, got [{}, {}]", x_lo, x_hi),
        });
    }

    let f_lo = model.evaluate(x_lo);
    let f_hi = model.evaluate(x_hi);

    if !(f_lo < 0.0 && f_hi > 0.0) && !(f_lo > 0.0 && f_hi < 0.0) {
        return Err(RootError::InvalidBracket { x_lo, x_hi, f_lo, f_hi });
    }

    // Normalize orientation: `neg` always carries the negative residual.
    let (mut neg, mut pos) = if f_lo < 0.0 { (x_lo, x_hi) } else { (x_hi, x_lo) };

    // ====== Step 2: Bisection Loop ======

    let mut mid = 0.5 * (neg + pos);
    let mut f_mid = model.evaluate(mid);

    let mut iterates = Vec::with_capacity(16);
    iterates.push(mid);

    let mut iterations = 0;

    while f_mid.abs() > config.tolerance {
        if iterations >= config.max_iterations {
            return Err(RootError::NonConvergence {
                iterations,
                best_x: mid,
                best_residual: f_mid.abs(),
            });
        }
        iterations += 1;

        // Keep the half that preserves the sign bracket
        if f_mid > 0.0 {
            pos = mid;
        } else {
            neg = mid;
        }

        mid = 0.5 * (neg + pos);
        f_mid = model.evaluate(mid);
        iterates.push(mid);
    }

    // ====== Step 3: Build Result ======

    Ok(RootResult {
        root: mid,
        iterations,
        residual: f_mid.abs(),
        iterates,
    })
}

// =================================================================================================
// Tests
// =================================================================================================
