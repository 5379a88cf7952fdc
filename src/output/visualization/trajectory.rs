//! Trajectory plotting for pendulum runs
//!
//! # Available functions
//!
//! - [`plot_trajectory`]            — θ(t) and ω(t) on shared time axes
//! - [`plot_phase_portrait`]        — ω against θ (orbit in state space)
//! - [`plot_trajectory_comparison`] — overlay several runs on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use numlab_rs::output::visualization::{plot_trajectory, plot_phase_portrait};
//!
//! let trajectory = RK4Integrator::new().integrate(&model, state0, &config)?;
//! plot_trajectory(&trajectory, "pendulum.png", None)?;
//! plot_phase_portrait(&trajectory, "phase.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::integrate::Trajectory;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Symmetric y-range covering every θ and ω value with 10% headroom
fn state_range(trajectory: &Trajectory) -> (f64, f64) {
    let max_abs = trajectory
        .states()
        .iter()
        .map(|s| s.theta.abs().max(s.omega.abs()))
        .fold(0.0_f64, f64::max)
        .max(1e-10);
    (-max_abs * 1.1, max_abs * 1.1)
}

/// Output-extension dispatch shared by every public plot function
fn extension_of(output_path: &str) -> &str {
    std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png")
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot θ(t) and ω(t) on a shared time axis
///
/// # Arguments
///
/// * `trajectory` — integration result
/// * `output_path` — output file path (`.png` → bitmap, `.svg` → vector)
/// * `config` — optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the trajectory is empty or the backend cannot write to
/// `output_path`.
pub fn plot_trajectory(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to plot".into());
    }

    let default_config = PlotConfig::time_series(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    match extension_of(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_trajectory_impl(backend, trajectory, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_trajectory_impl(backend, trajectory, config)
        }
    }
}

/// Plot the phase portrait ω against θ
///
/// A closed orbit indicates a conservative run; an inward spiral shows
/// damping dissipating energy; an outward spiral or strange-looking orbit
/// usually means the driving force dominates.
///
/// # Errors
///
/// Returns `Err` if the trajectory is empty or the backend fails.
pub fn plot_phase_portrait(
    trajectory: &Trajectory,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to plot".into());
    }

    let default_config = PlotConfig::phase_portrait(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    match extension_of(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_phase_portrait_impl(backend, trajectory, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_phase_portrait_impl(backend, trajectory, config)
        }
    }
}

/// Overlay the θ(t) curves of several runs on the same axes
///
/// Useful for method comparisons (same scenario under different
/// integrators) or parameter sweeps (same integrator, varying damping).
///
/// # Arguments
///
/// * `datasets` — `(label, trajectory)` pairs, one curve each
/// * `output_path` — output file path (`.png` or `.svg`)
/// * `config` — optional plot configuration;
///   use `config.series_colors` to override the default palette
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty or the backend fails.
pub fn plot_trajectory_comparison(
    datasets: Vec<(&str, &Trajectory)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }

    let default_config = PlotConfig::time_series(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    match extension_of(output_path) {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render θ(t) and ω(t) with the given drawing backend
fn plot_trajectory_impl<DB: DrawingBackend>(
    backend: DB,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let max_time = trajectory.final_state().time.max(1e-10);
    let (y_min, y_max) = state_range(trajectory);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            trajectory.states().iter().map(|s| (s.time, s.theta)),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Theta (rad)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    let omega_color = config.get_series_color(1);
    chart
        .draw_series(LineSeries::new(
            trajectory.states().iter().map(|s| (s.time, s.omega)),
            ShapeStyle::from(&omega_color).stroke_width(config.line_width),
        ))?
        .label("Omega (rad/s)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &omega_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render the phase portrait with the given drawing backend
fn plot_phase_portrait_impl<DB: DrawingBackend>(
    backend: DB,
    trajectory: &Trajectory,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let (lo, hi) = state_range(trajectory);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(lo..hi, lo..hi)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart.draw_series(LineSeries::new(
        trajectory.states().iter().map(|s| (s.theta, s.omega)),
        ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
    ))?;

    // Mark the initial state so orbit direction is readable
    let first = trajectory.states()[0];
    chart.draw_series(std::iter::once(Circle::new(
        (first.theta, first.omega),
        5,
        BLACK.filled(),
    )))?;

    root.present()?;
    Ok(())
}

/// Render the overlay comparison with the given drawing backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &Trajectory)],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let max_time = datasets
        .iter()
        .map(|(_, trajectory)| trajectory.final_state().time)
        .fold(0.0_f64, f64::max)
        .max(1e-10);

    let max_abs_theta = datasets
        .iter()
        .flat_map(|(_, trajectory)| trajectory.states().iter())
        .map(|s| s.theta.abs())
        .fold(0.0_f64, f64::max)
        .max(1e-10);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, (-max_abs_theta * 1.1)..(max_abs_theta * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (k, (label, trajectory)) in datasets.iter().enumerate() {
        let color = config.get_series_color(k);
        chart
            .draw_series(LineSeries::new(
                trajectory.states().iter().map(|s| (s.time, s.theta)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
