use std::fmt::Display;

use js_sys::Float32Array;
use relief_core::loader::load_tiff;
use relief_core::metrics::compute_stats;
use relief_core::resample::resample;
use relief_core::{analyze, AnalysisConfig, ElevationGrid};
use wasm_bindgen::prelude::*;

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Analyse an uploaded TIFF.
///
/// `config_json` may be empty for defaults, e.g. `{"maxDimension": 128}`.
/// Returns the full report (resampled grid, stats, contours, erosion tiers,
/// landform labels and annotations) as a plain JS object.
#[wasm_bindgen(js_name = analyzeTiff)]
pub fn analyze_tiff(bytes: &[u8], config_json: &str) -> Result<JsValue, JsValue> {
    let config = AnalysisConfig::from_json(config_json).map_err(js_err)?;
    let report = relief_core::analyze_tiff(bytes, &config).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&report).map_err(js_err)
}

/// Analyse an already-decoded row-major grid.
#[wasm_bindgen(js_name = analyzeGrid)]
pub fn analyze_grid(
    data: Vec<f32>,
    width: usize,
    height: usize,
    config_json: &str,
) -> Result<JsValue, JsValue> {
    let config = AnalysisConfig::from_json(config_json).map_err(js_err)?;
    let grid = ElevationGrid::new(width, height, data).map_err(js_err)?;
    let report = analyze(&grid, &config).map_err(js_err)?;
    serde_wasm_bindgen::to_value(&report).map_err(js_err)
}

/// Statistics table text for an uploaded TIFF.
#[wasm_bindgen(js_name = statsTable)]
pub fn stats_table(bytes: &[u8], max_dimension: usize) -> Result<String, JsValue> {
    let grid = load_tiff(bytes).map_err(js_err)?;
    let resampled = resample(&grid, max_dimension).map_err(js_err)?;
    Ok(compute_stats(&resampled).to_string())
}

/// A resampled grid handed to JS as a `Float32Array`, for surface and
/// heatmap traces that want typed arrays.
#[wasm_bindgen]
pub struct ResampledGrid {
    grid: ElevationGrid,
}

#[wasm_bindgen]
impl ResampledGrid {
    #[wasm_bindgen(constructor)]
    pub fn new(bytes: &[u8], max_dimension: usize) -> Result<ResampledGrid, JsValue> {
        let grid = load_tiff(bytes).map_err(js_err)?;
        let grid = resample(&grid, max_dimension).map_err(js_err)?;
        Ok(Self { grid })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Copy of the row-major samples.
    pub fn data(&self) -> Float32Array {
        Float32Array::from(self.grid.data())
    }
}
