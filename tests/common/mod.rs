//! Common utilities for integration tests

use numlab_rs::models::{PendulumModel, PendulumState};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Undamped, undriven pendulum in the small-angle approximation with
/// g = L = 1
///
/// The equation reduces to θ'' = -θ, whose solution from rest at θ₀ is
/// θ(t) = θ₀ cos(t). Both convergence and energy-conservation tests run
/// against this closed form.
pub fn linear_unit_pendulum() -> PendulumModel {
    PendulumModel::undriven(1.0, 1.0)
        .unwrap()
        .with_small_angle(true)
}

/// Exact state of the linear unit pendulum released from rest at theta0
pub fn exact_linear_state(theta0: f64, time: f64) -> PendulumState {
    PendulumState::at_time(theta0 * time.cos(), -theta0 * time.sin(), time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_exact_state_at_origin() {
        let state = exact_linear_state(3.1, 0.0);
        assert_eq!(state.theta, 3.1);
        assert_eq!(state.omega, 0.0);
    }
}
