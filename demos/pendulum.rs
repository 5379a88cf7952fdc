//! Example: Driven Damped Pendulum - Trapezoidal vs RK4
//!
//! Integrates the driven, damped pendulum with the historical parameter
//! set under both fixed-step schemes and compares accuracy and runtime:
//!
//! - Methods: Trapezoidal (Heun) and Runge-Kutta 4
//! - Scenario: θ₀ = 3.1 rad from rest, dt = 0.01 s, 1000 steps
//!
//! **Physical System**:
//! - Pendulum: point mass on a rigid rod, g = L = 1
//! - Damping: viscous, proportional to ω
//! - Driving: sinusoidal torque A·cos(φ·t)
//!
//! Writes a CSV of each trajectory, a comparison chart, and a phase
//! portrait into the system temp directory.

use numlab_rs::{
    integrate::{integrate_sweep,
                IntegrationConfig,
                Integrator,
                RK4Integrator,
                TrapezoidalIntegrator},
    models::{PendulumModel,
             PendulumState},
    output::{export_trajectory_csv,
             plot_phase_portrait,
             plot_trajectory_comparison,
             CsvConfig,
             CsvMetadata,
             PlotConfig},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Driven Damped Pendulum - Integrator Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Physical parameters ======

    let damping = 0.5;      // Viscous damping coefficient [1/s]
    let amplitude = 1.2;    // Driving torque amplitude [rad/s²]
    let phase_rate = 0.6667; // Driving angular frequency [rad/s]
    let gravity = 1.0;      // Gravitational acceleration [m/s²]
    let length = 1.0;       // Rod length [m]

    println!("Pendulum Parameters:");
    println!("  k (damping)    : {} 1/s", damping);
    println!("  A (amplitude)  : {} rad/s²", amplitude);
    println!("  φ (phase rate) : {} rad/s", phase_rate);
    println!("  g (gravity)    : {} m/s²", gravity);
    println!("  L (length)     : {} m\n", length);

    let model = PendulumModel::driven(damping, amplitude, phase_rate, gravity, length)?;

    // ====== Integration configuration ======

    let dt = 0.01;
    let steps = 1000;
    let state0 = PendulumState::new(3.1, 0.0);
    let config = IntegrationConfig::new(dt, steps);

    println!("Integration:");
    println!("  θ₀         : {} rad", state0.theta);
    println!("  ω₀         : {} rad/s", state0.omega);
    println!("  dt         : {} s", dt);
    println!("  Steps      : {}", steps);
    println!("  Total time : {} s\n", dt * steps as f64);

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Running both integrators
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Running: 1 Scenario × 2 Methods");
    println!("═══════════════════════════════════════════════════════\n");

    let integrators: Vec<(&str, Box<dyn Integrator>)> = vec![
        ("Trapezoidal", Box::new(TrapezoidalIntegrator::new())),
        ("Runge-Kutta", Box::new(RK4Integrator::new())),
    ];

    let mut results = Vec::new();

    for (name, integrator) in &integrators {
        let start = Instant::now();
        let trajectory = integrator.integrate(&model, state0, &config)?;
        let elapsed = start.elapsed();

        let final_state = trajectory.final_state();
        println!("{} ({}):", name, integrator.name());
        println!("  Runtime : {:.2?}", elapsed);
        println!("  θ(T)    : {:.6} rad", final_state.theta);
        println!("  ω(T)    : {:.6} rad/s\n", final_state.omega);

        // CSV alongside the charts, one file per method
        let csv_path = tmp_dir.join(format!("pendulum_{}.csv", name.to_lowercase()));
        let metadata =
            CsvMetadata::from_integration(integrator.name(), "driven damped pendulum", dt, steps);
        export_trajectory_csv(
            &trajectory,
            csv_path.to_str().ok_or("non-UTF-8 temp path")?,
            Some(&CsvConfig::default().with_metadata(metadata)),
        )?;
        println!("  CSV     : {}\n", csv_path.display());

        results.push((*name, trajectory));
    }

    // ====== Comparison chart ======

    let chart_path = tmp_dir.join("pendulum_comparison.png");
    let datasets = results
        .iter()
        .map(|(name, trajectory)| (*name, trajectory))
        .collect();
    plot_trajectory_comparison(
        datasets,
        chart_path.to_str().ok_or("non-UTF-8 temp path")?,
        Some(&PlotConfig::time_series("Trapezoidal vs RK4")),
    )?;
    println!("Comparison chart: {}", chart_path.display());

    // ====== Phase portrait of the RK4 run ======

    let phase_path = tmp_dir.join("pendulum_phase.png");
    plot_phase_portrait(
        &results[1].1,
        phase_path.to_str().ok_or("non-UTF-8 temp path")?,
        Some(&PlotConfig::phase_portrait("Driven Damped Pendulum")),
    )?;
    println!("Phase portrait  : {}\n", phase_path.display());

    // =============================================================================================
    // Damping sweep
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Damping Sweep (RK4)");
    println!("═══════════════════════════════════════════════════════\n");

    let damping_values = [0.0, 0.25, 0.5, 1.0];
    let sweep_models: Vec<PendulumModel> = damping_values
        .iter()
        .map(|&k| PendulumModel::driven(k, amplitude, phase_rate, gravity, length))
        .collect::<Result<_, _>>()?;

    let start = Instant::now();
    let sweep = integrate_sweep(&RK4Integrator::new(), &sweep_models, state0, &config)?;
    println!("Sweep of {} runs in {:.2?}\n", sweep.len(), start.elapsed());

    for (k, trajectory) in damping_values.iter().zip(&sweep) {
        let final_state = trajectory.final_state();
        println!(
            "  k = {:4}: θ(T) = {:+.4} rad, ω(T) = {:+.4} rad/s",
            k, final_state.theta, final_state.omega
        );
    }

    println!("\nDone.");
    Ok(())
}
