//! Root-finding error taxonomy
//!
//! All failures are reported synchronously to the caller; the solvers never
//! retry. Recovery — a new bracket, a new initial guess, a looser
//! tolerance — is caller-level policy.

use thiserror::Error;

/// Errors produced by the root-finding methods
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootError {
    /// Bisection was called with a bracket whose endpoint residuals do not
    /// strictly straddle zero.
    #[error(
        "invalid bracket [{x_lo}, {x_hi}]: f(x_lo) = {f_lo}, f(x_hi) = {f_hi} \
         (endpoint residuals must strictly straddle zero)"
    )]
    InvalidBracket {
        x_lo: f64,
        x_hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    /// Newton-Raphson encountered a (near-)zero derivative, making the
    /// update x ← x − f(x)/f'(x) undefined.
    #[error("zero derivative at x = {x} after {iterations} iterations (f'(x) = {derivative})")]
    ZeroDerivative {
        x: f64,
        derivative: f64,
        iterations: usize,
    },

    /// The iteration cap was exceeded without meeting the tolerance.
    ///
    /// Carries the best iterate found so the caller can still inspect how
    /// close the search got.
    #[error(
        "no convergence after {iterations} iterations: best x = {best_x} \
         with residual {best_residual}"
    )]
    NonConvergence {
        iterations: usize,
        best_x: f64,
        best_residual: f64,
    },

    /// Non-positive tolerance, zero iteration cap, or non-finite input.
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
}

// =================================================================================================
// Tests
// =================================================================================================
