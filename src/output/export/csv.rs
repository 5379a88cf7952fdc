//! CSV export for trajectories and root searches
//!
//! Writes results to CSV (Comma-Separated Values), readable by Excel,
//! Python pandas, MATLAB, and most plotting tools.
//!
//! # Features
//!
//! - **Simple interface**: one call per file
//! - **Metadata support**: optional `#`-comment header with run parameters
//! - **Customizable**: delimiter, precision, headers
//! - **Validation**: rejects empty and non-finite data up-front
//!
//! # Quick Examples
//!
//! ## Trajectory
//!
//! ```rust,ignore
//! use numlab_rs::output::export::export_trajectory_csv;
//!
//! let trajectory = integrator.integrate(&model, state0, &config)?;
//! export_trajectory_csv(&trajectory, "pendulum.csv", None)?;
//! ```
//!
//! **Output** (`pendulum.csv`):
//! ```csv
//! Time (s),Theta (rad),Omega (rad/s)
//! 0.000000,3.100000,0.000000
//! 0.010000,3.099998,-0.000416
//! ...
//! ```
//!
//! ## Root Search
//!
//! ```rust,ignore
//! use numlab_rs::output::export::export_root_search_csv;
//!
//! let result = bisect(&model, -2.0, 0.0, &config)?;
//! export_root_search_csv(&result, &model, "bisect.csv", None)?;
//! ```
//!
//! **Output** (`bisect.csv`):
//! ```csv
//! Iteration,x,f(x)
//! 0,-1.000000,0.000000
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::integrate::Trajectory;
use crate::models::QuadraticModel;
use crate::roots::RootResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig::default()
///     .delimiter(';')
///     .precision(12);
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only populated fields appear in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Method name (e.g. "RK4", "Bisection")
    pub method_name: Option<String>,

    /// Model description (e.g. "f(x) = +1x² -4x -5")
    pub model_name: Option<String>,

    /// Step size dt (seconds)
    pub dt: Option<f64>,

    /// Number of time steps
    pub steps: Option<usize>,

    /// Convergence tolerance
    pub tolerance: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata for an integration run
    pub fn from_integration(method: &str, model: &str, dt: f64, steps: usize) -> Self {
        Self {
            method_name: Some(method.to_string()),
            model_name: Some(model.to_string()),
            dt: Some(dt),
            steps: Some(steps),
            ..Default::default()
        }
    }

    /// Create metadata for a root search
    pub fn from_root_search(method: &str, model: &str, tolerance: f64) -> Self {
        Self {
            method_name: Some(method.to_string()),
            model_name: Some(model.to_string()),
            tolerance: Some(tolerance),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Numerical Methods Lab Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(method) = &metadata.method_name {
        writeln!(file, "# Method: {}", method)?;
    }
    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(file, "# Step Size: {} s", dt)?;
    }
    if let Some(steps) = metadata.steps {
        writeln!(file, "# Steps: {}", steps)?;
    }
    if let Some(tolerance) = metadata.tolerance {
        writeln!(file, "# Tolerance: {}", tolerance)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a pendulum trajectory to CSV
///
/// Writes one row per state with columns `Time (s)`, `Theta (rad)`,
/// `Omega (rad/s)`.
///
/// # Errors
///
/// - Empty trajectory
/// - File creation or write errors
///
/// # Example
///
/// ```rust,ignore
/// export_trajectory_csv(&trajectory, "pendulum.csv", None)?;
/// ```
pub fn export_trajectory_csv(
    trajectory: &Trajectory,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if trajectory.is_empty() {
        return Err("Empty trajectory: nothing to export".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "Time (s){}Theta (rad){}Omega (rad/s)",
        configuration.delimiter, configuration.delimiter
    )?;

    // ============================= Write Data =============================

    for state in trajectory.states() {
        writeln!(
            file,
            "{}{}{}{}{}",
            format_number(state.time, configuration),
            configuration.delimiter,
            format_number(state.theta, configuration),
            configuration.delimiter,
            format_number(state.omega, configuration),
        )?;
    }

    Ok(())
}

/// Export a root-search path to CSV
///
/// Writes one row per iterate with columns `Iteration`, `x`, `f(x)`. The
/// residual column is re-evaluated from the model so the file is
/// self-contained.
///
/// # Errors
///
/// - Empty iterate path
/// - File creation or write errors
///
/// # Example
///
/// ```rust,ignore
/// let result = newton_raphson(&model, -5.0, &config)?;
/// export_root_search_csv(&result, &model, "newton.csv", None)?;
/// ```
pub fn export_root_search_csv(
    result: &RootResult,
    model: &QuadraticModel,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if result.iterates.is_empty() {
        return Err("Empty root search: no iterates to export".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "Iteration{}x{}f(x)",
        configuration.delimiter, configuration.delimiter
    )?;

    // ============================= Write Data =============================

    for (iteration, x) in result.iterates.iter().enumerate() {
        writeln!(
            file,
            "{}{}{}{}{}",
            iteration,
            configuration.delimiter,
            format_number(*x, configuration),
            configuration.delimiter,
            format_number(model.evaluate(*x), configuration),
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrate::{IntegrationConfig, Integrator, RK4Integrator};
    use crate::models::{PendulumModel, PendulumState};
    use crate::roots::{bisect, RootConfig};
    use std::fs;
    use tempfile::NamedTempFile;

    fn short_trajectory() -> Trajectory {
        let model = PendulumModel::undriven(1.0, 1.0).unwrap();
        let state0 = PendulumState::new(3.1, 0.0);
        let config = IntegrationConfig::new(0.01, 5);
        RK4Integrator::new()
            .integrate(&model, state0, &config)
            .unwrap()
    }

    #[test]
    fn test_trajectory_export_shape() {
        let trajectory = short_trajectory();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_trajectory_csv(&trajectory, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // Header plus one row per state
        assert_eq!(lines.len(), 1 + trajectory.len());
        assert_eq!(lines[0], "Time (s),Theta (rad),Omega (rad/s)");
        assert!(lines[1].starts_with("0.000000,3.100000,"));
    }

    #[test]
    fn test_trajectory_export_with_metadata() {
        let trajectory = short_trajectory();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let metadata = CsvMetadata::from_integration("RK4", "free pendulum", 0.01, 5);
        let config = CsvConfig::default().with_metadata(metadata);

        export_trajectory_csv(&trajectory, path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Numerical Methods Lab Data"));
        assert!(content.contains("# Method: RK4"));
        assert!(content.contains("# Step Size: 0.01 s"));
        assert!(content.contains("# Steps: 5"));
    }

    #[test]
    fn test_trajectory_export_custom_delimiter_and_precision() {
        let trajectory = short_trajectory();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let config = CsvConfig::default().delimiter(';').precision(2);
        export_trajectory_csv(&trajectory, path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("0.00;3.10;0.00"));
    }

    #[test]
    fn test_root_search_export() {
        let model = crate::models::QuadraticModel::new(1.0, -4.0, -5.0).unwrap();
        let result = bisect(&model, 4.0, 6.5, &RootConfig::default()).unwrap();

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_root_search_csv(&result, &model, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "Iteration,x,f(x)");
        assert_eq!(lines.len(), 1 + result.iterates.len());
        assert!(lines[1].starts_with("0,"));

        // Final row carries the converged root
        let last = lines.last().unwrap();
        let root_field: f64 = last.split(',').nth(1).unwrap().parse().unwrap();
        assert!((root_field - result.root).abs() < 1e-6);
    }

    #[test]
    fn test_root_search_export_rejects_empty_path() {
        let model = crate::models::QuadraticModel::new(1.0, -4.0, -5.0).unwrap();
        let result = RootResult {
            root: 0.0,
            iterations: 0,
            residual: 0.0,
            iterates: vec![],
        };

        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        assert!(export_root_search_csv(&result, &model, path, None).is_err());
    }
}
