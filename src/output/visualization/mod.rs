//! Plotting built on the plotters crate
//!
//! # Submodules
//!
//! - [`config`] — shared [`PlotConfig`] used by every chart
//! - [`trajectory`] — time-series and phase-portrait plots of pendulum runs
//! - [`parabola`] — quadratic curve with the root-search path overlaid
//!
//! All plot functions accept `.png` (bitmap) and `.svg` (vector) output
//! paths, dispatching on the file extension.

pub mod config;
pub mod parabola;
pub mod trajectory;

pub use config::{PlotConfig, NO_TITLE};
pub use parabola::plot_root_search;
pub use trajectory::{plot_phase_portrait, plot_trajectory, plot_trajectory_comparison};
