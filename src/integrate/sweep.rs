//! Parameter sweeps: one scenario integrated under many model configurations
//!
//! Each model in a sweep is independent of the others, which makes the
//! sweep embarrassingly parallel. With the `parallel` feature enabled the
//! models are distributed across the rayon thread pool; otherwise they run
//! sequentially. Results come back in input order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::{PendulumModel, PendulumState};

use super::{IntegrationConfig, IntegrationError, Integrator, Trajectory};

/// Integrate the same initial state under every model in the slice
///
/// The first failing model aborts the sweep and its error is returned;
/// partial results are discarded.
///
/// # Example
///
/// ```rust
/// use numlab_rs::models::{PendulumModel, PendulumState};
/// use numlab_rs::integrate::{integrate_sweep, IntegrationConfig, RK4Integrator};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let models: Vec<_> = [0.0, 0.25, 0.5]
///     .iter()
///     .map(|&k| PendulumModel::driven(k, 0.0, 0.0, 1.0, 1.0))
///     .collect::<Result<_, _>>()?;
///
/// let trajectories = integrate_sweep(
///     &RK4Integrator::new(),
///     &models,
///     PendulumState::new(3.1, 0.0),
///     &IntegrationConfig::new(0.01, 1000),
/// )?;
/// assert_eq!(trajectories.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn integrate_sweep<I>(
    integrator: &I,
    models: &[PendulumModel],
    state0: PendulumState,
    config: &IntegrationConfig,
) -> Result<Vec<Trajectory>, IntegrationError>
where
    I: Integrator + Sync,
{
    #[cfg(feature = "parallel")]
    {
        models
            .par_iter()
            .map(|model| integrator.integrate(model, state0, config))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        models
            .iter()
            .map(|model| integrator.integrate(model, state0, config))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::{RK4Integrator, TrapezoidalIntegrator};

    fn damping_sweep() -> Vec<PendulumModel> {
        [0.0, 0.1, 0.2, 0.4]
            .iter()
            .map(|&k| PendulumModel::driven(k, 0.0, 0.0, 1.0, 1.0).unwrap())
            .collect()
    }

    #[test]
    fn test_sweep_preserves_input_order() {
        let models = damping_sweep();
        let state0 = PendulumState::new(1.0, 0.0);
        let config = IntegrationConfig::new(0.01, 500);

        let trajectories =
            integrate_sweep(&RK4Integrator::new(), &models, state0, &config).unwrap();

        assert_eq!(trajectories.len(), models.len());

        // More damping dissipates more energy, so the sweep order shows
        // in monotonically decreasing final amplitude.
        for pair in trajectories.windows(2) {
            let undamped = pair[0].final_state();
            let damped = pair[1].final_state();
            assert!(
                damped.theta.hypot(damped.omega) < undamped.theta.hypot(undamped.omega),
                "damping did not reduce amplitude"
            );
        }
    }

    #[test]
    fn test_sweep_matches_individual_runs() {
        let models = damping_sweep();
        let state0 = PendulumState::new(1.0, 0.0);
        let config = IntegrationConfig::new(0.01, 200);
        let integrator = TrapezoidalIntegrator::new();

        let swept = integrate_sweep(&integrator, &models, state0, &config).unwrap();

        for (model, trajectory) in models.iter().zip(&swept) {
            let individual = integrator.integrate(model, state0, &config).unwrap();
            assert_eq!(*trajectory, individual);
        }
    }

    #[test]
    fn test_empty_sweep_yields_no_trajectories() {
        let state0 = PendulumState::new(1.0, 0.0);
        let config = IntegrationConfig::new(0.01, 100);

        let trajectories =
            integrate_sweep(&RK4Integrator::new(), &[], state0, &config).unwrap();
        assert!(trajectories.is_empty());
    }

    #[test]
    fn test_sweep_error_aborts() {
        let models = damping_sweep();
        let state0 = PendulumState::new(1.0, 0.0);
        let bad_config = IntegrationConfig::new(-0.01, 100);

        let result = integrate_sweep(&RK4Integrator::new(), &models, state0, &bad_config);
        assert!(result.is_err());
    }
}
