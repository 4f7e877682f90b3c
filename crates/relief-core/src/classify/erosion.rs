//! Erosion risk tiers from slope tertiles.
//!
//! All W×H slopes (border zeros included) are sorted ascending; the
//! thresholds are the values at ⌊0.33·N⌋ and ⌊0.66·N⌋. A cell is
//! `LOW` below the first, `MODERATE` below the second, `HIGH` otherwise.
use serde::Serialize;

use crate::grid::ElevationGrid;
use crate::metrics::compute_slope_grid;

pub const LOW: u8 = 1;
pub const MODERATE: u8 = 2;
pub const HIGH: u8 = 3;

const LOW_QUANTILE: f64 = 0.33;
const HIGH_QUANTILE: f64 = 0.66;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskGrid {
    pub width: usize,
    pub height: usize,
    /// Row-major tiers in {1, 2, 3}.
    pub tiers: Vec<u8>,
    pub low_threshold: f32,
    pub high_threshold: f32,
}

impl RiskGrid {
    /// Reshape into `height` rows of `width` tiers.
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.tiers.chunks(self.width).map(<[u8]>::to_vec).collect()
    }

    /// Number of cells in tiers 1, 2 and 3.
    pub fn counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for &t in &self.tiers {
            counts[(t - 1) as usize] += 1;
        }
        counts
    }
}

pub fn classify_erosion(grid: &ElevationGrid) -> RiskGrid {
    let slope = compute_slope_grid(grid);

    let mut sorted = slope.data.clone();
    sorted.sort_by(f32::total_cmp);
    let n = sorted.len() as f64;
    let low_threshold = sorted[(n * LOW_QUANTILE).floor() as usize];
    let high_threshold = sorted[(n * HIGH_QUANTILE).floor() as usize];
    log::debug!("erosion thresholds: low={low_threshold} high={high_threshold}");

    let tiers = slope
        .data
        .iter()
        .map(|&s| {
            if s < low_threshold {
                LOW
            } else if s < high_threshold {
                MODERATE
            } else {
                HIGH
            }
        })
        .collect();

    RiskGrid {
        width: grid.width(),
        height: grid.height(),
        tiers,
        low_threshold,
        high_threshold,
    }
}
