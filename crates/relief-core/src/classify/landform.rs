//! Elevation-threshold landform labels.
//!
//! Two policies are kept apart on purpose:
//! - analysis (`ANALYSIS_THRESHOLDS`, 100/500 m): one `LandformCell` per cell,
//!   image row order, for tables and downstream statistics;
//! - annotation (`ANNOTATION_THRESHOLDS`, 50/200 m): one map symbol per cell
//!   with the y axis flipped (`y = rows − row`) to match a plotted image.
//!
//! Both take a `[row][col]` grid and emit records in row-major order.
use serde::Serialize;

use crate::error::Result;
use crate::grid::rectangular_dims;

/// Upper bounds (exclusive) of the two lower classes, in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low_below: f32,
    pub mid_below: f32,
}

impl Thresholds {
    /// 0, 1 or 2 for the low, middle and high class.
    #[inline]
    fn bucket(&self, elevation: f32) -> u8 {
        if elevation < self.low_below {
            0
        } else if elevation < self.mid_below {
            1
        } else {
            2
        }
    }
}

pub const ANALYSIS_THRESHOLDS: Thresholds = Thresholds { low_below: 100.0, mid_below: 500.0 };
pub const ANNOTATION_THRESHOLDS: Thresholds = Thresholds { low_below: 50.0, mid_below: 200.0 };

// ── Analysis policy ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Landform {
    Flat,
    Hilly,
    Mountainous,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandformCell {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    pub elevation: f32,
    pub label: Landform,
}

pub fn classify_landforms<R: AsRef<[f32]>>(rows: &[R]) -> Result<Vec<LandformCell>> {
    let (width, height) = rectangular_dims(rows)?;
    let mut out = Vec::with_capacity(width * height);
    for (y, row) in rows.iter().enumerate() {
        for (x, &elevation) in row.as_ref().iter().enumerate() {
            let label = match ANALYSIS_THRESHOLDS.bucket(elevation) {
                0 => Landform::Flat,
                1 => Landform::Hilly,
                _ => Landform::Mountainous,
            };
            out.push(LandformCell { x, y, elevation, label });
        }
    }
    Ok(out)
}

// ── Annotation policy ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnnotationClass {
    Lowland,
    Hilly,
    Mountainous,
}

impl AnnotationClass {
    pub fn symbol(self) -> &'static str {
        match self {
            AnnotationClass::Lowland => "🏝️",
            AnnotationClass::Hilly => "🌳",
            AnnotationClass::Mountainous => "⛰️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandformAnnotation {
    /// Column.
    pub x: usize,
    /// `rows − row`: row 0 is drawn at the top of the plot.
    pub y: usize,
    pub class: AnnotationClass,
    pub text: &'static str,
}

pub fn annotate_landforms<R: AsRef<[f32]>>(rows: &[R]) -> Result<Vec<LandformAnnotation>> {
    let (width, height) = rectangular_dims(rows)?;
    let mut out = Vec::with_capacity(width * height);
    for (i, row) in rows.iter().enumerate() {
        for (x, &elevation) in row.as_ref().iter().enumerate() {
            let class = match ANNOTATION_THRESHOLDS.bucket(elevation) {
                0 => AnnotationClass::Lowland,
                1 => AnnotationClass::Hilly,
                _ => AnnotationClass::Mountainous,
            };
            out.push(LandformAnnotation { x, y: height - i, class, text: class.symbol() });
        }
    }
    Ok(out)
}
