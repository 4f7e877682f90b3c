//! Shared central-difference gradient used by slope, aspect and statistics.
//! `pub(crate)` only — not re-exported from metrics/mod.rs.

/// Central-difference gradient at interior flat index `idx` of a row-major
/// grid `width` cells wide.
///
/// Returns `(dx, dy)`:
///
/// `dx = (E[x+1, y] − E[x−1, y]) / 2`
/// `dy = (E[x, y+1] − E[x, y−1]) / 2`
///
/// Samples are widened to `f64` before differencing.
/// Caller must ensure the cell is not on the border.
#[inline]
pub(crate) fn central_difference(data: &[f32], width: usize, idx: usize) -> (f64, f64) {
    let dx = (data[idx + 1] as f64 - data[idx - 1] as f64) / 2.0;
    let dy = (data[idx + width] as f64 - data[idx - width] as f64) / 2.0;
    (dx, dy)
}

/// Gradient magnitude.
#[inline]
pub(crate) fn slope(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

/// Gradient direction in degrees, normalised to [0°, 360°).
#[inline]
pub(crate) fn aspect_deg(dx: f64, dy: f64) -> f64 {
    let mut deg = dy.atan2(dx).to_degrees();
    if deg < 0.0 {
        deg += 360.0;
    }
    // -tiny + 360 can round up to exactly 360.
    if deg >= 360.0 {
        deg = 0.0;
    }
    deg
}

/// Iterate the flat indices of every interior cell, row by row.
/// Empty when either dimension is below 3.
pub(crate) fn interior_indices(width: usize, height: usize) -> impl Iterator<Item = usize> {
    let rows = if width < 3 { 1..1 } else { 1..height.saturating_sub(1) };
    rows.flat_map(move |y| (1..width - 1).map(move |x| y * width + x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn east_ramp_gradient() {
        // z = 2·x on a 3×3 grid
        let data = [0.0, 2.0, 4.0, 0.0, 2.0, 4.0, 0.0, 2.0, 4.0];
        let (dx, dy) = central_difference(&data, 3, 4);
        assert_relative_eq!(dx, 2.0);
        assert_relative_eq!(dy, 0.0);
        assert_relative_eq!(slope(dx, dy), 2.0);
        assert_relative_eq!(aspect_deg(dx, dy), 0.0);
    }

    #[test]
    fn aspect_is_wrapped_into_range() {
        assert_relative_eq!(aspect_deg(0.0, 1.0), 90.0);
        assert_relative_eq!(aspect_deg(-1.0, 0.0), 180.0);
        assert_relative_eq!(aspect_deg(0.0, -1.0), 270.0);
        assert!(aspect_deg(1.0, -1e-300) < 360.0);
    }

    #[test]
    fn interior_skips_border() {
        let idx: Vec<usize> = interior_indices(4, 4).collect();
        assert_eq!(idx, vec![5, 6, 9, 10]);
        assert_eq!(interior_indices(2, 5).count(), 0);
        assert_eq!(interior_indices(5, 2).count(), 0);
        assert_eq!(interior_indices(1, 1).count(), 0);
    }
}
