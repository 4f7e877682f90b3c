//! Per-cell slope and aspect grids (central differences).
//!
//! Border cells (row/col 0 and the last row/col) have no neighbour on one side
//! and are left at 0. With the `threading` feature the interior rows are
//! filled in parallel; every cell depends only on the source grid, so the
//! output is identical either way.
use serde::Serialize;

use super::gradient::{aspect_deg, central_difference, slope};
use crate::grid::ElevationGrid;

/// Gradient magnitude per cell, 0 on the border.
///
/// Values are stored as `f32`; erosion tertiles are taken from these stored
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlopeGrid {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

/// Gradient direction per cell in degrees [0°, 360°), 0 on the border.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectGrid {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

pub fn compute_slope_grid(grid: &ElevationGrid) -> SlopeGrid {
    SlopeGrid {
        width: grid.width(),
        height: grid.height(),
        data: map_interior(grid, |dx, dy| slope(dx, dy) as f32),
    }
}

pub fn compute_aspect_grid(grid: &ElevationGrid) -> AspectGrid {
    AspectGrid {
        width: grid.width(),
        height: grid.height(),
        data: map_interior(grid, |dx, dy| aspect_deg(dx, dy) as f32),
    }
}

/// Apply `f(dx, dy)` at every interior cell; border cells stay 0.
fn map_interior<F>(grid: &ElevationGrid, f: F) -> Vec<f32>
where
    F: Fn(f64, f64) -> f32 + Sync,
{
    let (w, h) = (grid.width(), grid.height());
    let mut out = vec![0.0f32; w * h];
    if w < 3 || h < 3 {
        return out;
    }

    let src = grid.data();
    let fill_row = |(y, row): (usize, &mut [f32])| {
        if y == 0 || y == h - 1 {
            return;
        }
        for x in 1..w - 1 {
            let (dx, dy) = central_difference(src, w, y * w + x);
            row[x] = f(dx, dy);
        }
    };

    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        out.par_chunks_mut(w).enumerate().for_each(fill_row);
    }
    #[cfg(not(feature = "threading"))]
    out.chunks_mut(w).enumerate().for_each(fill_row);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// z(r, c) = rise · c: every interior cell has slope `rise`, aspect 0°.
    fn east_ramp(n: usize, rise: f32) -> ElevationGrid {
        let data = (0..n * n).map(|i| (i % n) as f32 * rise).collect();
        ElevationGrid::new(n, n, data).unwrap()
    }

    #[test]
    fn ramp_slope_is_uniform_inside() {
        let grid = east_ramp(5, 3.0);
        let s = compute_slope_grid(&grid);
        for r in 0..5 {
            for c in 0..5 {
                let v = s.data[r * 5 + c];
                if r == 0 || c == 0 || r == 4 || c == 4 {
                    assert_eq!(v, 0.0, "border ({r}, {c}) should be 0");
                } else {
                    assert_relative_eq!(v, 3.0);
                }
            }
        }
    }

    #[test]
    fn north_facing_aspect() {
        // z = 4 · row, so dy = 4 and atan2(4, 0) = 90°.
        let data = (0..16).map(|i| (i / 4) as f32 * 4.0).collect();
        let grid = ElevationGrid::new(4, 4, data).unwrap();
        let a = compute_aspect_grid(&grid);
        assert_relative_eq!(a.data[5], 90.0);
        assert_relative_eq!(a.data[10], 90.0);
        assert_eq!(a.data[0], 0.0);
    }

    #[test]
    fn tiny_grid_is_all_border() {
        let grid = ElevationGrid::new(2, 2, vec![1.0, 9.0, 3.0, 7.0]).unwrap();
        assert_eq!(compute_slope_grid(&grid).data, vec![0.0; 4]);
    }
}
