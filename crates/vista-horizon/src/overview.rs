//! Framing extent for the overview map.

use vista_math::{Extent, Point2D};

/// Default growth applied around the visible-earth extent.
pub const DEFAULT_GROW_FACTOR: f64 = 1.75;

/// Growth used when the requested factor is not finite and positive.
pub const FALLBACK_GROW_FACTOR: f64 = 1.25;

/// Extent that frames both the visible-earth `extent` and the camera
/// `footpoint`, scaled about its center by `grow_factor`.
pub fn overview_extent(extent: &Extent, footpoint: Point2D, grow_factor: f64) -> Extent {
    let grow_factor = if grow_factor.is_finite() && grow_factor > 0.0 {
        grow_factor
    } else {
        FALLBACK_GROW_FACTOR
    };
    extent.union_point(footpoint).expand(grow_factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn test_contains_extent_and_point() {
        let e = Extent::new(0.0, 0.0, 100.0, 50.0);
        let cam = Point2D::new(-40.0, 80.0);
        let out = overview_extent(&e, cam, DEFAULT_GROW_FACTOR);
        assert!(out.contains_extent(&e));
        assert!(out.contains_point(cam));
    }

    #[test]
    fn test_scales_union_dimensions() {
        let e = Extent::new(0.0, 0.0, 100.0, 50.0);
        let cam = Point2D::new(-40.0, 80.0);
        let union = e.union_point(cam);
        let out = overview_extent(&e, cam, 1.75);
        assert_close(out.width(), 1.75 * union.width(), 1e-9);
        assert_close(out.height(), 1.75 * union.height(), 1e-9);
        assert_close(out.center().x, union.center().x, 1e-9);
        assert_close(out.center().y, union.center().y, 1e-9);
    }

    #[test]
    fn test_point_inside_extent_only_grows() {
        let e = Extent::new(-10.0, -10.0, 10.0, 10.0);
        let out = overview_extent(&e, Point2D::ZERO, 2.0);
        assert_eq!(out, Extent::new(-20.0, -20.0, 20.0, 20.0));
    }

    #[test]
    fn test_invalid_factor_falls_back() {
        let e = Extent::new(0.0, 0.0, 100.0, 100.0);
        let out = overview_extent(&e, Point2D::new(50.0, 50.0), 0.0);
        assert_close(out.width(), 100.0 * FALLBACK_GROW_FACTOR, 1e-9);
        let out = overview_extent(&e, Point2D::new(50.0, 50.0), f64::NAN);
        assert_close(out.height(), 100.0 * FALLBACK_GROW_FACTOR, 1e-9);
    }
}
