//! Pipeline orchestrator: Loader → Resampler → {stats, erosion, landforms}.
//!
//! The grid is passed explicitly to every stage; nothing is shared between
//! calls.
use serde::Serialize;

use crate::classify::{annotate_landforms, classify_erosion, classify_landforms};
use crate::classify::{LandformAnnotation, LandformCell, RiskGrid};
use crate::config::{AnalysisConfig, LandformSource};
use crate::error::Result;
use crate::grid::ElevationGrid;
use crate::loader::load_tiff;
use crate::metrics::{compute_stats, TerrainStats};
use crate::report::ContourLevels;
use crate::resample::resample;

/// Everything a front end needs to draw the heatmap, contours, surface,
/// erosion map, landform map and statistics table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub source_width: usize,
    pub source_height: usize,
    /// The resampled grid every statistic is computed on.
    pub elevation: ElevationGrid,
    pub stats: TerrainStats,
    pub contours: ContourLevels,
    pub erosion: RiskGrid,
    pub landforms: Vec<LandformCell>,
    pub annotations: Vec<LandformAnnotation>,
}

pub fn analyze(grid: &ElevationGrid, config: &AnalysisConfig) -> Result<AnalysisReport> {
    config.validate()?;

    let resampled = resample(grid, config.max_dimension)?;
    let stats = compute_stats(&resampled);
    let contours = ContourLevels::from_stats(&stats, config.contour_levels);
    let erosion = classify_erosion(&resampled);

    let landform_grid = match config.landform_source {
        LandformSource::Resampled => &resampled,
        LandformSource::Full => grid,
    };
    let rows: Vec<&[f32]> = landform_grid.data().chunks(landform_grid.width()).collect();
    let landforms = classify_landforms(&rows)?;
    let annotations = annotate_landforms(&rows)?;

    Ok(AnalysisReport {
        source_width: grid.width(),
        source_height: grid.height(),
        elevation: resampled,
        stats,
        contours,
        erosion,
        landforms,
        annotations,
    })
}

/// Decode a TIFF and analyse it.
pub fn analyze_tiff(bytes: &[u8], config: &AnalysisConfig) -> Result<AnalysisReport> {
    let grid = load_tiff(bytes)?;
    analyze(&grid, config)
}
