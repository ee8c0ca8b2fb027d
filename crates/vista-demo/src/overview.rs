//! Overview sink that reports what a secondary map view would draw.

use tracing::info;
use vista_horizon::{CameraMarker, LineStyle, OverviewSink};
use vista_math::{Extent, MultiPath};

/// Keeps the current overview graphics and logs every change.
#[derive(Debug, Default)]
pub struct ConsoleOverview {
    pub extent: Option<Extent>,
    pub marker: Option<CameraMarker>,
    pub line: Option<MultiPath>,
}

impl OverviewSink for ConsoleOverview {
    fn clear(&mut self) {
        self.marker = None;
        self.line = None;
    }

    fn go_to(&mut self, extent: Extent) {
        info!(
            "overview extent: x [{:.0}, {:.0}] y [{:.0}, {:.0}]",
            extent.xmin, extent.xmax, extent.ymin, extent.ymax
        );
        self.extent = Some(extent);
    }

    fn add_marker(&mut self, marker: &CameraMarker) {
        info!(
            "camera marker at ({:.0}, {:.0}) alt {:.0} m, rotated {:.1}\u{00B0}",
            marker.position.x, marker.position.y, marker.position.z, marker.angle_deg
        );
        self.marker = Some(*marker);
    }

    fn add_line(&mut self, line: &MultiPath, style: &LineStyle) {
        info!(
            "visible earth: {} path(s), {} vertices, {:?} rgb{:?} {}pt",
            line.len(),
            line.point_count(),
            style.dash,
            style.color,
            style.width
        );
        self.line = Some(line.clone());
    }
}
