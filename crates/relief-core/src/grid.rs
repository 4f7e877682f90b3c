use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// A 2D elevation grid, row-major, `f32` metres.
///
/// Immutable once built: every analysis stage reads a grid and returns new
/// values. Non-finite samples are replaced with 0 on construction so sorted
/// statistics never see a NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElevationGrid {
    width: usize,
    height: usize,
    /// Row-major elevation values.
    data: Vec<f32>,
}

impl ElevationGrid {
    /// Build a grid from row-major samples.
    ///
    /// Fails when either dimension is zero or `data.len() != width * height`.
    pub fn new(width: usize, height: usize, mut data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::Dimension {
                width,
                height,
                reason: "width and height must be at least 1",
            });
        }
        if data.len() != width * height {
            return Err(AnalysisError::Dimension {
                width,
                height,
                reason: "sample count does not match width * height",
            });
        }

        let mut replaced = 0usize;
        for v in data.iter_mut().filter(|v| !v.is_finite()) {
            *v = 0.0;
            replaced += 1;
        }
        if replaced > 0 {
            log::warn!("replaced {replaced} non-finite samples with 0");
        }

        Ok(Self { width, height, data })
    }

    /// Build a grid from `[row][col]` rows. All rows must share one length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let (width, height) = rectangular_dims(rows)?;
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self::new(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Reshape into `height` rows of `width` samples.
    pub fn rows(&self) -> Vec<Vec<f32>> {
        self.data.chunks(self.width).map(<[f32]>::to_vec).collect()
    }
}

/// `(width, height)` of a `[row][col]` grid, or an error if it is empty or
/// ragged.
pub(crate) fn rectangular_dims<R: AsRef<[f32]>>(rows: &[R]) -> Result<(usize, usize)> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.as_ref().len());
    if width == 0 || height == 0 {
        return Err(AnalysisError::Dimension {
            width,
            height,
            reason: "width and height must be at least 1",
        });
    }
    for (row, r) in rows.iter().enumerate() {
        let len = r.as_ref().len();
        if len != width {
            return Err(AnalysisError::RaggedRows { row, len, expected: width });
        }
    }
    Ok((width, height))
}
