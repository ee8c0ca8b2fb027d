//! Rings, open paths and multi-part lines.

use crate::{Extent, Point2D};

/// Ordered vertices of an implicitly closed polygon boundary.
///
/// The closing vertex is not stored: the last vertex connects back to the
/// first. Use [`Ring::closed_points`] when an explicitly closed sequence is
/// needed for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring {
    pub points: Vec<Point2D>,
}

impl Ring {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A ring needs at least three vertices to enclose anything.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Every edge of the ring, including the closing edge from the last
    /// vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// The vertices with the first one repeated at the end.
    pub fn closed_points(&self) -> Vec<Point2D> {
        let mut out = Vec::with_capacity(self.points.len() + 1);
        out.extend_from_slice(&self.points);
        if let Some(&first) = self.points.first() {
            out.push(first);
        }
        out
    }

    pub fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.points.iter().copied())
    }
}

/// Ordered vertices of an open polyline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point2D>,
}

impl Path {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    pub fn push(&mut self, p: Point2D) {
        self.points.push(p);
    }
}

/// A possibly disconnected line made of several open paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPath {
    pub paths: Vec<Path>,
}

impl MultiPath {
    pub fn new(paths: Vec<Path>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Total vertex count across all paths.
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(Path::len).sum()
    }

    /// Iterate over every vertex of every path.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.paths.iter().flat_map(|p| p.points.iter().copied())
    }

    /// Bounding box over all vertices, or `None` if there are none.
    pub fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::new(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_edges_include_closing_edge() {
        let ring = square();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2D::new(0.0, 1.0), Point2D::new(0.0, 0.0)));
    }

    #[test]
    fn test_closed_points_repeats_first() {
        let closed = square().closed_points();
        assert_eq!(closed.len(), 5);
        assert_eq!(closed.first(), closed.last());
    }

    #[test]
    fn test_closed_points_empty_ring() {
        assert!(Ring::default().closed_points().is_empty());
    }

    #[test]
    fn test_ring_validity() {
        assert!(square().is_valid());
        assert!(!Ring::new(vec![Point2D::ZERO, Point2D::ONE]).is_valid());
    }

    #[test]
    fn test_multipath_extent_spans_all_paths() {
        let line = MultiPath::new(vec![
            Path::new(vec![Point2D::new(-5.0, 0.0), Point2D::new(-4.0, 2.0)]),
            Path::new(vec![Point2D::new(7.0, -1.0)]),
        ]);
        assert_eq!(line.point_count(), 3);
        assert_eq!(line.extent(), Some(Extent::new(-5.0, -1.0, 7.0, 2.0)));
    }

    #[test]
    fn test_empty_multipath_has_no_extent() {
        assert!(MultiPath::default().extent().is_none());
    }
}
