//! Data export to text formats

pub mod csv;

pub use csv::{export_root_search_csv, export_trajectory_csv, CsvConfig, CsvMetadata};
