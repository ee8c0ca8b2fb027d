//! Cut rings where they cross the ±180° meridian.
//!
//! A ring in Web Mercator that wraps past the antimeridian would otherwise
//! render with a spurious segment spanning the whole map. The splitter wraps
//! every vertex into `[minX, maxX]`, then breaks the ring into open paths that
//! end and restart on the world boundary.

use std::cmp::Ordering;

use vista_math::{
    MultiPath, Path, Point2D, Ring, WEB_MERCATOR_MAX_X, WEB_MERCATOR_MIN_X,
    WEB_MERCATOR_WORLD_WIDTH,
};

/// Wrap `x` into `[minX, maxX]` by the smallest whole number of world widths.
pub fn normalize_x(x: f64) -> f64 {
    if x > WEB_MERCATOR_MAX_X {
        let offset = ((x - WEB_MERCATOR_MAX_X) / WEB_MERCATOR_WORLD_WIDTH).ceil();
        x - offset * WEB_MERCATOR_WORLD_WIDTH
    } else if x < WEB_MERCATOR_MIN_X {
        let offset = ((x - WEB_MERCATOR_MIN_X) / -WEB_MERCATOR_WORLD_WIDTH).ceil();
        x + offset * WEB_MERCATOR_WORLD_WIDTH
    } else {
        x
    }
}

fn normalize(p: Point2D) -> Point2D {
    Point2D::new(normalize_x(p.x), p.y)
}

/// Three-way sign: zero is its own class.
fn sign(x: f64) -> Ordering {
    x.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Where an edge between opposite-signed vertices meets the antimeridian.
///
/// Returns `None` when the short way between the two vertices passes through
/// x = 0 instead of wrapping around the world edge.
fn dateline_crossing(point: Point2D, next: Point2D) -> Option<f64> {
    let (neg, pos) = if point.x < 0.0 {
        (point.x, next.x)
    } else {
        (next.x, point.x)
    };

    let dx = pos - neg;
    let diff_neg = neg - WEB_MERCATOR_MIN_X;
    let diff_pos = WEB_MERCATOR_MAX_X - pos;
    let dx2 = diff_neg + diff_pos;
    if dx2 >= dx {
        return None;
    }
    // Both vertices sit on the antimeridian itself.
    if dx2 == 0.0 {
        return Some(point.y);
    }

    let pre = if point.x == neg { diff_neg } else { diff_pos };
    Some(point.y + (next.y - point.y) * (pre / dx2))
}

/// Split a closed ring into dateline-safe open paths.
///
/// Every edge, including the closing one, is visited once. An edge that wraps
/// around the world edge ends the current path on the boundary of its first
/// vertex's side and starts a new path on the opposite boundary at the same
/// interpolated y. The last path is closed with the ring's first vertex and,
/// when the ring was cut, joined onto the front of the first path so that
/// every output path starts and ends on a world boundary.
pub fn split_ring(ring: &Ring) -> MultiPath {
    let Some(&first) = ring.points.first() else {
        return MultiPath::default();
    };

    let mut finished: Vec<Path> = Vec::new();
    let mut current = Path::default();
    for (a, b) in ring.edges() {
        let point = normalize(a);
        let next = normalize(b);
        current.push(point);

        if sign(point.x) == sign(next.x) {
            continue;
        }
        let Some(y) = dateline_crossing(point, next) else {
            continue;
        };

        let (end_x, start_x) = if point.x < 0.0 {
            (WEB_MERCATOR_MIN_X, WEB_MERCATOR_MAX_X)
        } else {
            (WEB_MERCATOR_MAX_X, WEB_MERCATOR_MIN_X)
        };
        current.push(Point2D::new(end_x, y));
        finished.push(std::mem::replace(
            &mut current,
            Path::new(vec![Point2D::new(start_x, y)]),
        ));
    }
    current.push(normalize(first));

    if finished.is_empty() {
        return MultiPath::new(vec![current]);
    }

    // The last path runs back into the ring's first vertex, which is where
    // the first path begins.
    let head = std::mem::take(&mut finished[0]);
    let mut joined = current.points;
    joined.extend(head.points.into_iter().skip(1));
    finished[0] = Path::new(joined);

    tracing::trace!(paths = finished.len(), "split ring at antimeridian");
    MultiPath::new(finished)
}
