//! Plain-data shaping for a charting front end: contour ranges and the
//! statistics table. Nothing here draws.
use std::fmt;

use serde::Serialize;

use crate::metrics::TerrainStats;

pub const DEFAULT_CONTOUR_LEVELS: usize = 15;

/// Contour range for an elevation map: `levels` equal intervals from the
/// lowest to the highest sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContourLevels {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl ContourLevels {
    pub fn new(min: f64, max: f64, levels: usize) -> Self {
        Self { start: min, end: max, size: (max - min) / levels as f64 }
    }

    pub fn from_stats(stats: &TerrainStats, levels: usize) -> Self {
        Self::new(stats.min_elevation, stats.max_elevation, levels)
    }

    /// Every contour value from `start` to `end` inclusive. A flat grid has a
    /// single level.
    pub fn values(&self) -> Vec<f64> {
        if self.size <= 0.0 {
            return vec![self.start];
        }
        let steps = ((self.end - self.start) / self.size).round() as usize;
        (0..=steps).map(|i| self.start + i as f64 * self.size).collect()
    }
}

/// Statistics table, one parameter per line.
impl fmt::Display for TerrainStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, String); 12] = [
            ("Min Elevation (m)", format!("{:.2}", self.min_elevation)),
            ("Max Elevation (m)", format!("{:.2}", self.max_elevation)),
            ("Avg Elevation (m)", format!("{:.2}", self.mean_elevation)),
            ("Median Elevation (m)", format!("{:.2}", self.median_elevation)),
            ("Elevation Range (m)", format!("{:.2}", self.elevation_range)),
            ("Standard Deviation (m)", format!("{:.2}", self.std_deviation)),
            ("Avg Slope", format!("{:.2}", self.mean_slope)),
            ("Avg Aspect (°)", format!("{:.2}", self.mean_aspect)),
            ("Flat Area (%)", format!("{:.2}%", self.flat_percentage)),
            ("Hilly Area (%)", format!("{:.2}%", self.hilly_percentage)),
            ("Mountainous Area (%)", format!("{:.2}%", self.mountain_percentage)),
            ("Contour Density", format!("{:.4}", self.contour_density)),
        ];
        writeln!(f, "{:<24} {:>12}", "Parameter", "Value")?;
        for (name, value) in rows {
            writeln!(f, "{name:<24} {value:>12}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ElevationGrid;
    use crate::metrics::compute_stats;

    #[test]
    fn contour_size_is_range_over_levels() {
        let c = ContourLevels::new(10.0, 40.0, 15);
        assert_eq!(c.size, 2.0);
        let v = c.values();
        assert_eq!(v.len(), 16);
        assert_eq!(v[0], 10.0);
        assert_eq!(v[15], 40.0);
    }

    #[test]
    fn flat_grid_has_one_contour() {
        assert_eq!(ContourLevels::new(5.0, 5.0, 15).values(), vec![5.0]);
    }

    #[test]
    fn table_lists_every_parameter() {
        let grid = ElevationGrid::new(4, 4, vec![42.0; 16]).unwrap();
        let table = compute_stats(&grid).to_string();
        assert_eq!(table.lines().count(), 13);
        assert!(table.contains("Median Elevation (m)"));
        assert!(table.contains("42.00"));
        assert!(table.contains("25.00%"));
        assert!(table.lines().last().unwrap().ends_with("0.0000"));
    }
}
