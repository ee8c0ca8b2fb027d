//! Pin ring vertices to the edges of the main view's viewport.

use glam::DVec2;
use vista_math::{Point2D, Ring};

/// Size of the main view in pixels. Screen origin is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if the screen point lies in `[0, width] x [0, height]`,
    /// widened by `eps` on every side.
    pub fn contains(&self, screen: DVec2, eps: f64) -> bool {
        screen.x >= -eps
            && screen.x <= self.width + eps
            && screen.y >= -eps
            && screen.y <= self.height + eps
    }

    /// Clamp each axis of the screen point independently into the viewport.
    pub fn clamp(&self, screen: DVec2) -> DVec2 {
        DVec2::new(
            screen.x.clamp(0.0, self.width),
            screen.y.clamp(0.0, self.height),
        )
    }
}

/// Screen-projection capability of the host view.
pub trait ScreenProjector {
    /// Project a map point to screen pixels. `None` when the point is behind
    /// the camera or off the visible globe.
    fn map_to_screen(&self, point: Point2D) -> Option<DVec2>;

    /// Unproject a screen pixel to the map. `None` when the pixel does not
    /// hit the globe.
    fn screen_to_map(&self, screen: DVec2) -> Option<Point2D>;

    /// Current size of the view.
    fn viewport(&self) -> Viewport;
}

/// Clamp every vertex of `ring` into the projector's viewport.
///
/// Vertices already on screen are kept unchanged. Off-screen vertices are
/// clamped in screen space and unprojected back to the map; they are dropped
/// when either projection fails. The result never has more vertices than
/// the input.
pub fn clamp_to_viewport<P: ScreenProjector + ?Sized>(ring: &Ring, projector: &P) -> Ring {
    let viewport = projector.viewport();
    let mut dropped = 0usize;
    let mut points = Vec::with_capacity(ring.len());

    for &vertex in &ring.points {
        let Some(screen) = projector
            .map_to_screen(vertex)
            .filter(|s| s.is_finite())
        else {
            dropped += 1;
            continue;
        };

        if viewport.contains(screen, 0.0) {
            points.push(vertex);
            continue;
        }

        match projector.screen_to_map(viewport.clamp(screen)) {
            Some(p) if p.is_finite() => points.push(p),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, kept = points.len(), "dropped unprojectable horizon vertices");
    }
    Ring::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Screen = map scaled by 1/10, off-map pixels beyond x = 150 do not
    /// unproject.
    struct ScaledProjector {
        viewport: Viewport,
        hole_beyond_x: f64,
    }

    impl ScreenProjector for ScaledProjector {
        fn map_to_screen(&self, point: Point2D) -> Option<DVec2> {
            if point.x.is_nan() {
                return None;
            }
            Some(point / 10.0)
        }

        fn screen_to_map(&self, screen: DVec2) -> Option<Point2D> {
            (screen.x <= self.hole_beyond_x).then_some(screen * 10.0)
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }
    }

    fn projector() -> ScaledProjector {
        ScaledProjector {
            viewport: Viewport::new(200.0, 100.0),
            hole_beyond_x: f64::INFINITY,
        }
    }

    #[test]
    fn test_on_screen_vertices_unchanged() {
        let ring = Ring::new(vec![
            Point2D::new(100.0, 100.0),
            Point2D::new(1900.0, 100.0),
            Point2D::new(1000.0, 900.0),
        ]);
        assert_eq!(clamp_to_viewport(&ring, &projector()), ring);
    }

    #[test]
    fn test_off_screen_vertex_clamped_per_axis() {
        let ring = Ring::new(vec![
            Point2D::new(100.0, 100.0),
            Point2D::new(5000.0, -300.0),
            Point2D::new(-50.0, 500.0),
        ]);
        let out = clamp_to_viewport(&ring, &projector());
        assert_eq!(out.len(), 3);
        assert_eq!(out.points[1], Point2D::new(2000.0, 0.0));
        assert_eq!(out.points[2], Point2D::new(0.0, 500.0));
    }

    #[test]
    fn test_failed_unprojection_drops_vertex() {
        let p = ScaledProjector {
            viewport: Viewport::new(200.0, 100.0),
            hole_beyond_x: 150.0,
        };
        let ring = Ring::new(vec![
            Point2D::new(100.0, 100.0),
            Point2D::new(5000.0, 500.0),
            Point2D::new(1000.0, 900.0),
        ]);
        let out = clamp_to_viewport(&ring, &p);
        assert_eq!(out.points, vec![Point2D::new(100.0, 100.0), Point2D::new(1000.0, 900.0)]);
    }

    #[test]
    fn test_failed_projection_drops_vertex() {
        let ring = Ring::new(vec![
            Point2D::new(f64::NAN, 0.0),
            Point2D::new(10.0, 10.0),
        ]);
        let out = clamp_to_viewport(&ring, &projector());
        assert_eq!(out.points, vec![Point2D::new(10.0, 10.0)]);
    }

    #[test]
    fn test_output_never_longer_and_on_screen() {
        let p = projector();
        let ring = Ring::new(
            (0..40)
                .map(|i| {
                    let a = i as f64 * 0.3;
                    Point2D::new(1000.0 + 3000.0 * a.cos(), 500.0 + 3000.0 * a.sin())
                })
                .collect(),
        );
        let out = clamp_to_viewport(&ring, &p);
        assert!(out.len() <= ring.len());
        for v in &out.points {
            let s = p.map_to_screen(*v).unwrap();
            assert!(p.viewport().contains(s, 1e-9), "{s:?} off screen");
        }
    }

    #[test]
    fn test_viewport_clamp() {
        let vp = Viewport::new(10.0, 20.0);
        assert_eq!(vp.clamp(DVec2::new(-1.0, 25.0)), DVec2::new(0.0, 20.0));
        assert!(vp.contains(DVec2::new(10.0, 20.0), 0.0));
        assert!(!vp.contains(DVec2::new(10.1, 20.0), 0.0));
    }
}
