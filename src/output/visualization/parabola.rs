//! Quadratic curve plotting with the root-search path overlaid
//!
//! Draws f(x) over a window around the search path, the x-axis, and the
//! sequence of iterates as numbered markers. Makes the difference between
//! bisection (interval halving) and Newton-Raphson (tangent jumps)
//! immediately visible.

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::models::QuadraticModel;
use crate::roots::RootResult;

/// Plot a quadratic with the iterates of a root search overlaid
///
/// # Arguments
///
/// * `model` — the quadratic that was searched
/// * `result` — search result carrying the iterate path
/// * `output_path` — output file path (`.png` → bitmap, `.svg` → vector)
/// * `config` — optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the iterate path is empty or the backend cannot write
/// to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use numlab_rs::output::visualization::plot_root_search;
///
/// let result = newton_raphson(&model, -5.0, &config)?;
/// plot_root_search(&model, &result, "newton.png", None)?;
/// ```
pub fn plot_root_search(
    model: &QuadraticModel,
    result: &RootResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if result.iterates.is_empty() {
        return Err("Empty root search: no iterates to plot".into());
    }

    let default_config = PlotConfig::root_search(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_root_search_impl(backend, model, result, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_root_search_impl(backend, model, result, config)
        }
    }
}

/// Render the curve and iterate markers with the given drawing backend
fn plot_root_search_impl<DB: DrawingBackend>(
    backend: DB,
    model: &QuadraticModel,
    result: &RootResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root_area = backend.into_drawing_area();
    root_area.fill(&config.background)?;

    // Window: the iterate path padded by 20% of its span on each side
    let x_lo = result.iterates.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_hi = result
        .iterates
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let span = (x_hi - x_lo).max(1.0);
    let x_min = x_lo - 0.2 * span;
    let x_max = x_hi + 0.2 * span;

    const CURVE_SAMPLES: usize = 400;
    let curve: Vec<(f64, f64)> = (0..=CURVE_SAMPLES)
        .map(|i| {
            let x = x_min + (x_max - x_min) * i as f64 / CURVE_SAMPLES as f64;
            (x, model.evaluate(x))
        })
        .collect();

    let y_min = curve.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = curve
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_pad = (y_max - y_min).max(1.0) * 0.1;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.1}", y))
            .draw()?;
    }

    // The quadratic itself
    chart
        .draw_series(LineSeries::new(
            curve.into_iter(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label(model.to_string())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    // The x-axis, so the root crossing is visible
    chart.draw_series(LineSeries::new(
        [(x_min, 0.0), (x_max, 0.0)],
        ShapeStyle::from(&BLACK).stroke_width(1),
    ))?;

    // Iterates as circles along the curve
    let iterate_color = config.get_series_color(1);
    chart
        .draw_series(result.iterates.iter().map(|&x| {
            Circle::new((x, model.evaluate(x)), 4, iterate_color.filled())
        }))?
        .label(format!("Iterates ({} steps)", result.iterations))
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, iterate_color.filled()));

    // The converged root gets a distinct marker
    chart.draw_series(std::iter::once(Cross::new(
        (result.root, model.evaluate(result.root)),
        8,
        ShapeStyle::from(&BLACK).stroke_width(2),
    )))?;

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root_area.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
