//! Root-finding methods
//!
//! Locates x such that f(x) ≈ 0 for a [`QuadraticModel`](crate::models::QuadraticModel),
//! using one of two strategies:
//!
//! - **[`bisect`]** — bracketing. The caller supplies an interval whose
//!   endpoint residuals strictly straddle zero (either orientation); the
//!   interval is halved until the midpoint residual falls within
//!   tolerance. Robust, linear convergence.
//!
//! - **[`newton_raphson`]** — derivative-based. Starting from an initial
//!   guess, repeatedly applies x ← x − f(x)/f'(x). Quadratic convergence
//!   near the root, but undefined wherever the derivative vanishes.
//!
//! Both entry points are pure functions: identical inputs always produce
//! bit-identical [`RootResult`]s.
//!
//! # Convergence and the Iteration Cap
//!
//! Convergence is declared on the **residual**: |f(x)| ≤ tolerance. An
//! exactly-zero residual therefore stops immediately (0 ≤ tolerance for any
//! positive tolerance). A naive implementation of either loop can spin
//! forever on an ill-posed problem, so every loop is capped at
//! [`RootConfig::max_iterations`] and fails with
//! [`RootError::NonConvergence`] when the cap is hit — the error carries
//! the best iterate found so the caller can still inspect it.
//!
//! # Example
//!
//! ```rust
//! use numlab_rs::models::QuadraticModel;
//! use numlab_rs::roots::{bisect, newton_raphson, RootConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let f = QuadraticModel::new(1.0, -4.0, -5.0)?; // roots at -1 and 5
//! let config = RootConfig::default();            // tolerance 1e-4
//!
//! let left = bisect(&f, -2.0, 0.0, &config)?;
//! let right = newton_raphson(&f, 7.0, &config)?;
//!
//! assert!((left.root + 1.0).abs() < 1e-3);
//! assert!((right.root - 5.0).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod bisection;
mod error;
pub mod newton;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bisection::bisect;
pub use error::RootError;
pub use newton::newton_raphson;

// =================================================================================================
// Root Search Configuration
// =================================================================================================

/// Configuration for a root search
///
/// # Defaults
///
/// - `tolerance = 1e-4` — the residual bound |f(x)| ≤ tolerance
/// - `max_iterations = 10_000` — safety cap against non-convergent loops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Maximum acceptable residual |f(x)| for declaring convergence
    pub tolerance: f64,

    /// Iteration cap; exceeding it fails with [`RootError::NonConvergence`]
    pub max_iterations: usize,
}

impl RootConfig {
    /// Create a configuration with an explicit tolerance and iteration cap
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self { tolerance, max_iterations }
    }

    /// Create a configuration with a given tolerance and the default cap
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance, ..Self::default() }
    }

    /// Validate that the parameters are usable
    pub fn validate(&self) -> Result<(), RootError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(RootError::InvalidParameter {
                reason: format!("tolerance must be positive and finite, got {}", self.tolerance),
            });
        }
        if self.max_iterations == 0 {
            return Err(RootError::InvalidParameter {
                reason: "max_iterations must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 10_000,
        }
    }
}

// =================================================================================================
// Root Search Result
// =================================================================================================

/// Result of a converged root search
///
/// Carries the converged value, the iteration count, the achieved residual,
/// and the full sequence of iterates visited — the reporting boundary plots
/// the iterate path, so the solvers expose the whole sequence rather than
/// just the final value.
#[derive(Debug, Clone, PartialEq)]
pub struct RootResult {
    /// The converged x value
    pub root: f64,

    /// Number of iterations taken
    pub iterations: usize,

    /// Achieved residual |f(root)|
    pub residual: f64,

    /// Every iterate visited, in order, final value included
    pub iterates: Vec<f64>,
}

// =================================================================================================
// Tests
// =================================================================================================
