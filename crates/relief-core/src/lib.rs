pub mod classify;
pub mod config;
pub mod error;
pub mod grid;
pub mod loader;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod resample;

pub use config::{AnalysisConfig, LandformSource};
pub use error::{AnalysisError, Result};
pub use grid::ElevationGrid;
pub use pipeline::{analyze, analyze_tiff, AnalysisReport};
