//! Nearest-neighbour downsampling to a bounded maximum dimension.
//!
//!   scale = min(1, max_dimension / max(W, H))
//!   new_w = round(W · scale),  new_h = round(H · scale)
//!   out[i][j] = src[floor(i / scale) · W + floor(j / scale)]   (0 if out of range)
//!
//! No interpolation: downstream statistics are defined on exactly this grid.
use crate::error::{AnalysisError, Result};
use crate::grid::ElevationGrid;

/// Default cap on the longer axis of an analysed grid.
pub const DEFAULT_MAX_DIMENSION: usize = 128;

pub fn resample(grid: &ElevationGrid, max_dimension: usize) -> Result<ElevationGrid> {
    if max_dimension == 0 {
        return Err(AnalysisError::Dimension {
            width: grid.width(),
            height: grid.height(),
            reason: "max_dimension must be at least 1",
        });
    }

    let (width, height) = (grid.width(), grid.height());
    let scale = (max_dimension as f64 / width.max(height) as f64).min(1.0);
    let new_w = scaled_len(width, scale, max_dimension);
    let new_h = scaled_len(height, scale, max_dimension);

    let src = grid.data();
    let mut data = Vec::with_capacity(new_w * new_h);
    for i in 0..new_h {
        let orig_y = (i as f64 / scale).floor() as usize;
        for j in 0..new_w {
            let orig_x = (j as f64 / scale).floor() as usize;
            data.push(src.get(orig_y * width + orig_x).copied().unwrap_or(0.0));
        }
    }

    log::info!("Resized to: {new_w} x {new_h}");
    ElevationGrid::new(new_w, new_h, data)
}

/// `round(len · scale)` clamped into `[1, max_dimension]`.
fn scaled_len(len: usize, scale: f64, max_dimension: usize) -> usize {
    ((len as f64 * scale).round() as usize).clamp(1, max_dimension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> ElevationGrid {
        let data = (0..width * height).map(|i| i as f32).collect();
        ElevationGrid::new(width, height, data).unwrap()
    }

    #[test]
    fn within_bounds_is_identity() {
        let grid = ramp(7, 5);
        let out = resample(&grid, 128).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn halves_each_axis() {
        let grid = ramp(4, 4);
        let out = resample(&grid, 2).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        // scale = 0.5 → sources (0,0), (0,2), (2,0), (2,2)
        assert_eq!(out.data(), &[0.0, 2.0, 8.0, 10.0]);
    }

    #[test]
    fn longer_axis_hits_the_cap() {
        let grid = ramp(300, 150);
        let out = resample(&grid, 128).unwrap();
        assert_eq!((out.width(), out.height()), (128, 64));
    }

    #[test]
    fn thin_strip_keeps_one_column() {
        // round(1 · 0.128) = 0 before clamping.
        let grid = ramp(1, 1000);
        let out = resample(&grid, 128).unwrap();
        assert_eq!((out.width(), out.height()), (1, 128));
        assert_eq!(out.get(1, 0), 7.0); // floor(1 / 0.128) = 7
    }

    #[test]
    fn zero_max_dimension_is_rejected() {
        let grid = ramp(2, 2);
        assert!(resample(&grid, 0).is_err());
    }
}
