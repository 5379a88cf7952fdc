//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by the time-series, phase-portrait, and root-search charts.
///
/// # Example
///
/// ```rust,ignore
/// use numlab_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::time_series("Damped Pendulum");
/// config.line_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Primary line color (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-series charts, one per series
    ///
    /// If None, a default palette is used.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: RED,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept `&str`, `String`, or `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (the default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for time-series charts (θ and ω against t)
    pub fn time_series(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (s)".to_string();
        config.ylabel = "Angle (rad)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Pendulum Trajectory".to_string());
        config
    }

    /// Create config for phase portraits (ω against θ)
    pub fn phase_portrait(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Theta (rad)".to_string();
        config.ylabel = "Omega (rad/s)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Phase Portrait".to_string());
        config
    }

    /// Create config for root-search charts (f(x) with iterates overlaid)
    pub fn root_search(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "x".to_string();
        config.ylabel = "f(x)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Root Search".to_string());
        config
    }

    /// Get color for the series at a given index
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette.
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
