use crate::Point2D;

/// Axis-aligned bounding rectangle in planar map coordinates.
///
/// Invariant: xmin <= xmax, ymin <= ymax.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Extent {
    /// Create an extent from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    /// Degenerate extent covering a single point.
    pub fn from_point(p: Point2D) -> Self {
        Self {
            xmin: p.x,
            ymin: p.y,
            xmax: p.x,
            ymax: p.y,
        }
    }

    /// Smallest extent enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        points
            .into_iter()
            .fold(None, |acc: Option<Extent>, p| match acc {
                Some(e) => Some(e.union_point(p)),
                None => Some(Extent::from_point(p)),
            })
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns the center point of the extent.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.xmin + self.xmax) * 0.5,
            (self.ymin + self.ymax) * 0.5,
        )
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: Point2D) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }

    /// Returns true if `other` lies entirely inside this extent (edges included).
    pub fn contains_extent(&self, other: &Extent) -> bool {
        other.xmin >= self.xmin
            && other.xmax <= self.xmax
            && other.ymin >= self.ymin
            && other.ymax <= self.ymax
    }

    /// Returns the smallest extent enclosing self and the point.
    pub fn union_point(&self, p: Point2D) -> Extent {
        Extent {
            xmin: self.xmin.min(p.x),
            ymin: self.ymin.min(p.y),
            xmax: self.xmax.max(p.x),
            ymax: self.ymax.max(p.y),
        }
    }

    /// Scales width and height by `factor` about the center.
    ///
    /// A factor that is not finite and positive leaves the extent unchanged.
    pub fn expand(&self, factor: f64) -> Extent {
        if !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let c = self.center();
        let half_w = self.width() * factor * 0.5;
        let half_h = self.height() * factor * 0.5;
        Extent {
            xmin: c.x - half_w,
            ymin: c.y - half_h,
            xmax: c.x + half_w,
            ymax: c.y + half_h,
        }
    }

    /// Returns true if the extent has zero area
    /// (degenerate on at least one axis).
    pub fn is_degenerate(&self) -> bool {
        self.xmin == self.xmax || self.ymin == self.ymax
    }
}
