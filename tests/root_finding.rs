//! End-to-end tests for the root-finding methods
//!
//! Both methods run against f(x) = x² - 4x - 5, whose roots sit at
//! x = -1 and x = 5, and must agree with each other wherever both apply.

use numlab_rs::models::QuadraticModel;
use numlab_rs::roots::{bisect, newton_raphson, RootConfig, RootError};

mod common;
use common::relative_error;

fn reference_quadratic() -> QuadraticModel {
    QuadraticModel::new(1.0, -4.0, -5.0).unwrap()
}

#[test]
fn test_bisection_finds_both_roots() {
    let f = reference_quadratic();
    let config = RootConfig::default();

    let negative = bisect(&f, -2.0, 0.0, &config).unwrap();
    assert!(relative_error(negative.root, -1.0) < 1e-3);
    assert!(negative.residual <= config.tolerance);

    let positive = bisect(&f, 4.0, 6.0, &config).unwrap();
    assert!(relative_error(positive.root, 5.0) < 1e-3);
    assert!(positive.residual <= config.tolerance);
}

#[test]
fn test_newton_finds_both_roots() {
    let f = reference_quadratic();
    let config = RootConfig::default();

    let negative = newton_raphson(&f, -5.0, &config).unwrap();
    assert!(relative_error(negative.root, -1.0) < 1e-3);

    let positive = newton_raphson(&f, 10.0, &config).unwrap();
    assert!(relative_error(positive.root, 5.0) < 1e-3);
}

#[test]
fn test_methods_agree_on_the_same_root() {
    let f = reference_quadratic();
    let config = RootConfig::with_tolerance(1e-8);

    let bisected = bisect(&f, 4.0, 6.5, &config).unwrap();
    let newton = newton_raphson(&f, 10.0, &config).unwrap();

    // Tolerance 1e-8 on the residual maps to roughly 1.7e-9 on x near
    // x = 5 where f'(5) = 6.
    assert!((bisected.root - newton.root).abs() < 1e-8);
}

#[test]
fn test_newton_converges_in_fewer_iterations() {
    let f = reference_quadratic();
    let config = RootConfig::with_tolerance(1e-10);

    let bisected = bisect(&f, 4.0, 6.5, &config).unwrap();
    let newton = newton_raphson(&f, 6.5, &config).unwrap();

    println!(
        "iterations: bisection = {}, newton = {}",
        bisected.iterations, newton.iterations
    );
    assert!(newton.iterations < bisected.iterations);
}

#[test]
fn test_bisection_rejects_non_straddling_bracket() {
    let f = reference_quadratic();
    let result = bisect(&f, 6.0, 8.0, &RootConfig::default());
    assert!(matches!(result, Err(RootError::InvalidBracket { .. })));
}

#[test]
fn test_newton_reports_stationary_start() {
    // The vertex of the parabola is at x = 2, where f'(x) = 0.
    let f = reference_quadratic();
    let result = newton_raphson(&f, 2.0, &RootConfig::default());
    assert!(matches!(result, Err(RootError::ZeroDerivative { .. })));
}

#[test]
fn test_results_are_reproducible() {
    let f = reference_quadratic();
    let config = RootConfig::default();

    let first = bisect(&f, -2.0, 0.0, &config).unwrap();
    let second = bisect(&f, -2.0, 0.0, &config).unwrap();
    assert_eq!(first, second);

    let first = newton_raphson(&f, -5.0, &config).unwrap();
    let second = newton_raphson(&f, -5.0, &config).unwrap();
    assert_eq!(first, second);
}
