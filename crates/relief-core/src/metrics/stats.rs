//! Grid-wide elevation and terrain statistics.
//!
//! Elevation statistics cover every cell. Slope, aspect, terrain-class counts
//! and contour density use interior cells only, but every ratio is taken over
//! the full cell count `W × H`; with a border present the three class
//! percentages therefore sum to less than 100.
use serde::Serialize;

use super::gradient::{aspect_deg, central_difference, interior_indices, slope};
use crate::grid::ElevationGrid;

/// Interior slope below this is flat terrain.
pub const FLAT_SLOPE_LIMIT: f64 = 5.0;
/// Interior slope below this (and not flat) is hilly terrain; the rest is mountainous.
pub const HILLY_SLOPE_LIMIT: f64 = 15.0;
/// Interior slope strictly above this counts toward contour density.
pub const CONTOUR_SLOPE_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainStats {
    pub min_elevation: f64,
    pub max_elevation: f64,
    pub mean_elevation: f64,
    /// Upper median: sorted sample at index ⌊N/2⌋.
    pub median_elevation: f64,
    /// Population standard deviation.
    pub std_deviation: f64,
    pub elevation_range: f64,
    pub mean_slope: f64,
    pub mean_aspect: f64,
    pub flat_percentage: f64,
    pub hilly_percentage: f64,
    pub mountain_percentage: f64,
    /// Fraction (not percent) of cells with slope > 10.
    pub contour_density: f64,
}

pub fn compute_stats(grid: &ElevationGrid) -> TerrainStats {
    let (w, h) = (grid.width(), grid.height());
    let total = grid.len() as f64;
    let data = grid.data();

    // --- Elevation: sorted ascending, sums in sorted order ---
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);

    let min_elevation = sorted[0] as f64;
    let max_elevation = sorted[sorted.len() - 1] as f64;
    let mean_elevation = sorted.iter().map(|&v| v as f64).sum::<f64>() / total;
    let median_elevation = sorted[sorted.len() / 2] as f64;
    let sum_sq = sorted
        .iter()
        .map(|&v| (v as f64 - mean_elevation).powi(2))
        .sum::<f64>();
    let std_deviation = (sum_sq / total).sqrt();

    // --- Interior slope / aspect ---
    let mut slope_sum = 0.0f64;
    let mut aspect_sum = 0.0f64;
    let (mut flat, mut hilly, mut mountain, mut contour) = (0usize, 0usize, 0usize, 0usize);

    for idx in interior_indices(w, h) {
        let (dx, dy) = central_difference(data, w, idx);
        let s = slope(dx, dy);

        if s < FLAT_SLOPE_LIMIT {
            flat += 1;
        } else if s < HILLY_SLOPE_LIMIT {
            hilly += 1;
        } else {
            mountain += 1;
        }
        if s > CONTOUR_SLOPE_THRESHOLD {
            contour += 1;
        }

        slope_sum += s;
        aspect_sum += aspect_deg(dx, dy);
    }

    let stats = TerrainStats {
        min_elevation,
        max_elevation,
        mean_elevation,
        median_elevation,
        std_deviation,
        elevation_range: max_elevation - min_elevation,
        mean_slope: slope_sum / total,
        mean_aspect: aspect_sum / total,
        flat_percentage: flat as f64 / total * 100.0,
        hilly_percentage: hilly as f64 / total * 100.0,
        mountain_percentage: mountain as f64 / total * 100.0,
        contour_density: contour as f64 / total,
    };
    log::debug!("terrain stats for {w}x{h}: {stats:?}");
    stats
}
