mod gradient;
pub mod slope;
pub mod stats;

pub use slope::{compute_aspect_grid, compute_slope_grid, AspectGrid, SlopeGrid};
pub use stats::{compute_stats, TerrainStats};
