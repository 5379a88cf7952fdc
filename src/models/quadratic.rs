//! Quadratic function model
//!
//! Defines f(x) = a·x² + b·x + c together with its analytic derivative
//! f'(x) = 2·a·x + b. This is the only function family the root finders
//! operate on: the bracketing method needs `evaluate`, Newton-Raphson
//! additionally needs `derivative`.

use std::fmt;

use crate::roots::RootError;

// =================================================================================================
// Quadratic Model
// =================================================================================================

/// Quadratic function f(x) = a·x² + b·x + c
///
/// Immutable once constructed. Coefficients are validated at construction:
/// non-finite values (NaN, ±Inf) are rejected so that every later evaluation
/// is well defined.
///
/// # Degenerate Cases
///
/// `a = 0` is **allowed** — the model degrades to a line, which still has a
/// root as long as `b != 0`. The solvers handle the resulting constant
/// derivative like any other (Newton-Raphson converges in one step, and a
/// zero-slope line fails with [`RootError::ZeroDerivative`]).
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::QuadraticModel;
///
/// // f(x) = x² - 4x - 5 = (x + 1)(x - 5)
/// let f = QuadraticModel::new(1.0, -4.0, -5.0).unwrap();
///
/// assert_eq!(f.evaluate(-1.0), 0.0);
/// assert_eq!(f.evaluate(5.0), 0.0);
/// assert_eq!(f.derivative(2.0), 0.0); // vertex at x = 2
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticModel {
    /// Coefficient of x²
    a: f64,

    /// Coefficient of x
    b: f64,

    /// Constant term
    c: f64,
}

impl QuadraticModel {
    /// Create a quadratic model from its three coefficients
    ///
    /// # Errors
    ///
    /// Returns [`RootError::InvalidParameter`] if any coefficient is NaN or
    /// infinite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, RootError> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(RootError::InvalidParameter {
                    reason: format!("coefficient {} is not finite ({})", name, value),
                });
            }
        }

        Ok(Self { a, b, c })
    }

    /// Evaluate f(x) = a·x² + b·x + c
    ///
    /// Uses Horner form `(a·x + b)·x + c` — one fewer multiplication and
    /// slightly better rounding behaviour than the naive expansion.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Evaluate the analytic derivative f'(x) = 2·a·x + b
    pub fn derivative(&self, x: f64) -> f64 {
        2.0 * self.a * x + self.b
    }

    /// Coefficient of x²
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of x
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term
    pub fn c(&self) -> f64 {
        self.c
    }
}

impl fmt::Display for QuadraticModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = {:+}x² {:+}x {:+}", self.a, self.b, self.c)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
