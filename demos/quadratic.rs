//! Example: Quadratic Root Finding - Bisection vs Newton-Raphson
//!
//! Locates both roots of f(x) = x² - 4x - 5 (at x = -1 and x = 5) with
//! the two available methods and compares their convergence behaviour:
//!
//! - Bisection: robust interval halving from a sign-straddling bracket
//! - Newton-Raphson: tangent-line jumps from a single starting guess
//!
//! Writes a CSV of each search path and a chart overlaying the iterates
//! on the parabola into the system temp directory.

use numlab_rs::{
    models::QuadraticModel,
    output::{export_root_search_csv, plot_root_search, CsvConfig, CsvMetadata, PlotConfig},
    roots::{bisect, newton_raphson, RootConfig, RootResult},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Quadratic Root Finding - Method Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Problem definition ======

    let model = QuadraticModel::new(1.0, -4.0, -5.0)?;
    let config = RootConfig::default();

    println!("Problem:");
    println!("  {}", model);
    println!("  Roots at x = -1 and x = 5");
    println!("  Tolerance      : {:e}", config.tolerance);
    println!("  Iteration cap  : {}\n", config.max_iterations);

    // ====== Temporary directory ======

    let tmp_dir = std::env::temp_dir();

    // =============================================================================================
    // Running both methods on both roots
    // =============================================================================================

    println!("═══════════════════════════════════════════════════════");
    println!("  Running: 2 Roots × 2 Methods");
    println!("═══════════════════════════════════════════════════════\n");

    let bisection_runs = [("negative root", -2.0, 0.0), ("positive root", 4.0, 6.5)];
    let newton_runs = [("negative root", -5.0), ("positive root", 10.0)];

    let mut results: Vec<(String, RootResult)> = Vec::new();

    for (label, x_lo, x_hi) in bisection_runs {
        let result = bisect(&model, x_lo, x_hi, &config)?;
        println!("Bisection, {} (bracket [{}, {}]):", label, x_lo, x_hi);
        print_result(&result);
        results.push((format!("bisect_{}", label.replace(' ', "_")), result));
    }

    for (label, x0) in newton_runs {
        let result = newton_raphson(&model, x0, &config)?;
        println!("Newton-Raphson, {} (x₀ = {}):", label, x0);
        print_result(&result);
        results.push((format!("newton_{}", label.replace(' ', "_")), result));
    }

    // ====== CSV and chart output ======

    for (name, result) in &results {
        let csv_path = tmp_dir.join(format!("{}.csv", name));
        let method = if name.starts_with("bisect") {
            "Bisection"
        } else {
            "Newton-Raphson"
        };
        let metadata =
            CsvMetadata::from_root_search(method, &model.to_string(), config.tolerance);
        export_root_search_csv(
            result,
            &model,
            csv_path.to_str().ok_or("non-UTF-8 temp path")?,
            Some(&CsvConfig::default().with_metadata(metadata)),
        )?;

        let chart_path = tmp_dir.join(format!("{}.png", name));
        plot_root_search(
            &model,
            result,
            chart_path.to_str().ok_or("non-UTF-8 temp path")?,
            Some(&PlotConfig::root_search(format!("{} ({})", model, method))),
        )?;

        println!("Wrote {} and {}", csv_path.display(), chart_path.display());
    }

    println!("\nDone.");
    Ok(())
}

fn print_result(result: &RootResult) {
    println!("  Root       : {:.8}", result.root);
    println!("  Iterations : {}", result.iterations);
    println!("  Residual   : {:e}\n", result.residual);
}
