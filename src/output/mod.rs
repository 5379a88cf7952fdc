//! Output and reporting: CSV export and plotting
//!
//! Everything downstream of a computation lives here. The numerical
//! modules return plain data ([`Trajectory`](crate::integrate::Trajectory),
//! [`RootResult`](crate::roots::RootResult)); this module turns that data
//! into files.
//!
//! # Submodules
//!
//! - [`export`] — CSV writers for trajectories and root searches
//! - [`visualization`] — plotters-based charts (time series, phase
//!   portraits, root-search overlays)

pub mod export;
pub mod visualization;

pub use export::{export_root_search_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
pub use visualization::{
    plot_phase_portrait, plot_root_search, plot_trajectory, plot_trajectory_comparison,
    PlotConfig,
};
