//! End-to-end visible-earth pipeline against a simulated nadir camera.

use vista_horizon::{
    CameraMarker, CameraPose, HorizonCircle, LineStyle, NadirCamera, OverviewSink,
    OverviewTracker, ScreenProjector, Viewport, clamp_to_viewport, split_ring,
};
use vista_math::{Extent, MultiPath, Point2D, WEB_MERCATOR_MAX_X, WEB_MERCATOR_MIN_X};

fn viewport() -> Viewport {
    Viewport::new(1280.0, 720.0)
}

fn camera_for(pose: &CameraPose) -> NadirCamera {
    NadirCamera::new(
        pose.position.footpoint(),
        pose.position.z,
        pose.heading_deg,
        45.0,
        viewport(),
    )
}

#[derive(Default)]
struct Overview {
    extent: Option<Extent>,
    markers: Vec<CameraMarker>,
    lines: Vec<MultiPath>,
}

impl OverviewSink for Overview {
    fn clear(&mut self) {
        self.markers.clear();
        self.lines.clear();
    }

    fn go_to(&mut self, extent: Extent) {
        self.extent = Some(extent);
    }

    fn add_marker(&mut self, marker: &CameraMarker) {
        self.markers.push(*marker);
    }

    fn add_line(&mut self, line: &MultiPath, _style: &LineStyle) {
        self.lines.push(line.clone());
    }
}

#[test]
fn test_low_camera_ring_clamped_to_viewport() {
    let pose = CameraPose::new(0.0, 0.0, 1_000_000.0, 0.0);
    let cam = camera_for(&pose);
    let ring = HorizonCircle::default()
        .build(pose.position.footpoint(), pose.position.z)
        .unwrap();
    let clamped = clamp_to_viewport(&ring, &cam);

    assert_eq!(clamped.len(), ring.len());
    for v in &clamped.points {
        let s = cam.map_to_screen(*v).expect("clamped vertex must project");
        assert!(cam.viewport().contains(s, 1e-6), "{s:?} outside viewport");
    }
}

#[test]
fn test_high_camera_ring_untouched() {
    let pose = CameraPose::new(0.0, 0.0, 20_000_000.0, 0.0);
    let cam = camera_for(&pose);
    let ring = HorizonCircle::default()
        .build(pose.position.footpoint(), pose.position.z)
        .unwrap();
    assert_eq!(clamp_to_viewport(&ring, &cam), ring);
}

#[test]
fn test_dateline_view_split_into_two_paths() {
    let pose = CameraPose::new(WEB_MERCATOR_MAX_X - 10_000.0, 0.0, 1_000_000.0, 0.0);
    let cam = camera_for(&pose);
    let ring = HorizonCircle::default()
        .build(pose.position.footpoint(), pose.position.z)
        .unwrap();
    let line = split_ring(&clamp_to_viewport(&ring, &cam));

    assert_eq!(line.len(), 2);
    assert!(
        line.points()
            .all(|p| (WEB_MERCATOR_MIN_X..=WEB_MERCATOR_MAX_X).contains(&p.x))
    );
    for path in &line.paths {
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        assert_eq!(first.x.abs(), WEB_MERCATOR_MAX_X);
        assert_eq!(last.x, first.x);
    }
}

#[test]
fn test_tracker_follows_camera_flight() {
    let mut tracker = OverviewTracker::default();
    let mut overview = Overview::default();

    for step in 0..6 {
        let x = -3_000_000.0 + step as f64 * 1_000_000.0;
        let pose = CameraPose::new(x, 1_500_000.0, 2_500_000.0, step as f64 * 15.0);
        let cam = camera_for(&pose);
        let visible = tracker
            .on_camera_change(&pose, &cam, &mut overview)
            .unwrap()
            .expect("camera over the globe always sees geometry");

        let extent = overview.extent.unwrap();
        assert_eq!(extent, visible.extent);
        assert!(extent.contains_point(Point2D::new(x, 1_500_000.0)));
        assert!(extent.contains_extent(&visible.line.extent().unwrap()));
        assert_eq!(overview.markers.len(), 1);
        assert_eq!(overview.lines.len(), 1);
        assert_eq!(overview.markers[0].angle_deg, step as f64 * 15.0 - 90.0);
    }
    assert_eq!(tracker.frames_published(), 6);
}
