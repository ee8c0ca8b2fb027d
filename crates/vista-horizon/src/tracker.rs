//! Recompute and publish the visible-earth overlay on every camera change.

use vista_math::{Extent, MultiPath, Point2D, is_web_mercator};

use crate::{
    DEFAULT_GROW_FACTOR, HorizonCircle, HorizonError, ScreenProjector, clamp_to_viewport,
    overview_extent, split_ring,
};

/// Camera location in Web Mercator meters; `z` is altitude above the sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Well-known id of the spatial reference of `x`/`y`.
    pub spatial_reference: u32,
}

impl CameraPosition {
    /// The point on the map directly below the camera.
    pub fn footpoint(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Camera position and compass heading in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: CameraPosition,
    pub heading_deg: f64,
}

impl CameraPose {
    /// A pose in Web Mercator (wkid 3857).
    pub fn new(x: f64, y: f64, altitude_m: f64, heading_deg: f64) -> Self {
        Self {
            position: CameraPosition {
                x,
                y,
                z: altitude_m,
                spatial_reference: 3857,
            },
            heading_deg,
        }
    }

    /// Marker for the overview map. The icon points east at zero rotation,
    /// so the heading is offset by -90°.
    pub fn marker(&self) -> CameraMarker {
        CameraMarker {
            position: self.position,
            angle_deg: self.heading_deg - 90.0,
        }
    }
}

/// Camera icon published to the overview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraMarker {
    pub position: CameraPosition,
    /// Icon rotation in degrees.
    pub angle_deg: f64,
}

/// Stroke dash pattern for the visible-earth line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashPattern {
    Solid,
    #[default]
    ShortDot,
    Dash,
    Dot,
}

/// How the visible-earth line is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// RGB color.
    pub color: [u8; 3],
    /// Stroke width in points.
    pub width: f32,
    pub dash: DashPattern,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 125],
            width: 2.0,
            dash: DashPattern::ShortDot,
        }
    }
}

/// The secondary view that displays the overview.
pub trait OverviewSink {
    /// Remove every previously published graphic.
    fn clear(&mut self);

    /// Frame the view on `extent`.
    fn go_to(&mut self, extent: Extent);

    fn add_marker(&mut self, marker: &CameraMarker);

    fn add_line(&mut self, line: &MultiPath, style: &LineStyle);
}

/// Everything derived from one camera pose.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleEarth {
    /// Vertices left on the horizon ring after viewport clamping.
    pub ring_len: usize,
    /// Visible-earth boundary, split at the antimeridian.
    pub line: MultiPath,
    /// Overview framing extent.
    pub extent: Extent,
    pub marker: CameraMarker,
}

/// Drives the visible-earth pipeline for one overview.
///
/// Calls must not overlap; each one recomputes from scratch and shares no
/// state with the previous frame beyond the publish counter.
#[derive(Clone, Debug)]
pub struct OverviewTracker {
    circle: HorizonCircle,
    grow_factor: f64,
    style: LineStyle,
    frames_published: u64,
}

impl Default for OverviewTracker {
    fn default() -> Self {
        Self::new(HorizonCircle::default(), DEFAULT_GROW_FACTOR, LineStyle::default())
    }
}

impl OverviewTracker {
    pub fn new(circle: HorizonCircle, grow_factor: f64, style: LineStyle) -> Self {
        Self {
            circle,
            grow_factor,
            style,
            frames_published: 0,
        }
    }

    pub fn circle(&self) -> &HorizonCircle {
        &self.circle
    }

    pub fn grow_factor(&self) -> f64 {
        self.grow_factor
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Number of frames handed to a sink so far.
    pub fn frames_published(&self) -> u64 {
        self.frames_published
    }

    /// Build the visible-earth overlay for `pose` without publishing it.
    ///
    /// Returns `Ok(None)` when fewer than three horizon vertices survive
    /// viewport clamping, or when the surviving outline has no area.
    pub fn compute<P: ScreenProjector + ?Sized>(
        &self,
        pose: &CameraPose,
        projector: &P,
    ) -> Result<Option<VisibleEarth>, HorizonError> {
        let wkid = pose.position.spatial_reference;
        if !is_web_mercator(wkid) {
            return Err(HorizonError::UnsupportedSpatialReference(wkid));
        }

        let footpoint = pose.position.footpoint();
        let ring = self.circle.build(footpoint, pose.position.z)?;
        let clamped = clamp_to_viewport(&ring, projector);
        if !clamped.is_valid() {
            tracing::debug!(
                survived = clamped.len(),
                "too few horizon vertices on screen, no geometry this frame"
            );
            return Ok(None);
        }

        let line = split_ring(&clamped);
        let Some(line_extent) = line.extent().filter(|e| !e.is_degenerate()) else {
            tracing::debug!("visible earth collapsed to a point or segment, no geometry this frame");
            return Ok(None);
        };
        let extent = overview_extent(&line_extent, footpoint, self.grow_factor);

        Ok(Some(VisibleEarth {
            ring_len: clamped.len(),
            line,
            extent,
            marker: pose.marker(),
        }))
    }

    /// Recompute the overlay for `pose` and replace whatever `sink` showed.
    ///
    /// The sink is left untouched when there is no geometry this frame or
    /// when the pose is rejected.
    pub fn on_camera_change<P, S>(
        &mut self,
        pose: &CameraPose,
        projector: &P,
        sink: &mut S,
    ) -> Result<Option<VisibleEarth>, HorizonError>
    where
        P: ScreenProjector + ?Sized,
        S: OverviewSink + ?Sized,
    {
        let visible = match self.compute(pose, projector) {
            Ok(Some(visible)) => visible,
            Ok(None) => return Ok(None),
            Err(err) => {
                tracing::warn!("rejected camera pose: {err}");
                return Err(err);
            }
        };

        sink.clear();
        sink.go_to(visible.extent);
        sink.add_marker(&visible.marker);
        sink.add_line(&visible.line, &self.style);
        self.frames_published += 1;

        tracing::debug!(
            vertices = visible.ring_len,
            paths = visible.line.len(),
            "published visible earth"
        );
        Ok(Some(visible))
    }
}
