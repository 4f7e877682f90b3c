#![cfg(target_arch = "wasm32")]

use relief_wasm::{analyze_grid, analyze_tiff, stats_table};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn grid_report_has_stats() {
    let report = analyze_grid(vec![42.0; 16], 4, 4, "").unwrap();
    let stats = js_sys::Reflect::get(&report, &JsValue::from_str("stats")).unwrap();
    let median = js_sys::Reflect::get(&stats, &JsValue::from_str("medianElevation")).unwrap();
    assert_eq!(median.as_f64(), Some(42.0));
}

#[wasm_bindgen_test]
fn empty_upload_is_an_error() {
    assert!(analyze_tiff(&[], "").is_err());
    assert!(stats_table(&[], 128).is_err());
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    let err = analyze_grid(vec![1.0; 4], 2, 2, r#"{"maxDimension": 0}"#).unwrap_err();
    assert!(err.as_string().unwrap().contains("maxDimension"));
}
