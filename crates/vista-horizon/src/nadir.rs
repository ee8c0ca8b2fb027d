//! A pinhole camera looking straight down at the reference sphere.
//!
//! Stands in for a host 3D view: it implements [`ScreenProjector`] with real
//! perspective projection and globe ray-casting, which is enough to drive the
//! visible-earth pipeline headlessly.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use vista_math::{EARTH_RADIUS_M, Point2D, lon_lat_to_mercator, mercator_to_lon_lat};

use crate::{ScreenProjector, Viewport};

/// Camera above `footpoint`, looking at the sphere's center, with screen-up
/// pointing along `heading_deg` (clockwise from north).
#[derive(Clone, Debug)]
pub struct NadirCamera {
    footpoint: Point2D,
    viewport: Viewport,
    /// Longitude of the footpoint, used to keep unprojected points on the
    /// same unwrapped branch as the horizon ring.
    foot_lon: f64,
    eye: DVec3,
    /// Outward surface normal under the camera.
    normal: DVec3,
    right: DVec3,
    up: DVec3,
    /// Focal length in pixels.
    focal: f64,
}

fn sphere_point(lon: f64, lat: f64) -> DVec3 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat) * EARTH_RADIUS_M
}

impl NadirCamera {
    /// Create a camera `altitude_m` above `footpoint`.
    ///
    /// `fov_y_deg` is the vertical field of view.
    pub fn new(
        footpoint: Point2D,
        altitude_m: f64,
        heading_deg: f64,
        fov_y_deg: f64,
        viewport: Viewport,
    ) -> Self {
        let (lon, lat) = mercator_to_lon_lat(footpoint);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let normal = DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
        let east = DVec3::new(-sin_lon, cos_lon, 0.0);
        let north = DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);

        let (sin_h, cos_h) = heading_deg.to_radians().sin_cos();
        let up = north * cos_h + east * sin_h;
        let right = east * cos_h - north * sin_h;

        let focal = (viewport.height * 0.5) / (fov_y_deg.to_radians() * 0.5).tan();

        Self {
            footpoint,
            viewport,
            foot_lon: lon,
            eye: normal * (EARTH_RADIUS_M + altitude_m),
            normal,
            right,
            up,
            focal,
        }
    }

    pub fn footpoint(&self) -> Point2D {
        self.footpoint
    }

    /// Distance from the camera to the sphere's center.
    fn eye_distance(&self) -> f64 {
        self.eye.length()
    }
}

impl ScreenProjector for NadirCamera {
    fn map_to_screen(&self, point: Point2D) -> Option<DVec2> {
        let (lon, lat) = mercator_to_lon_lat(point);
        let p = sphere_point(lon, lat);

        // Above the horizon iff the angle at the center is below acos(R / d).
        let r2 = EARTH_RADIUS_M * EARTH_RADIUS_M;
        if p.dot(self.normal) * self.eye_distance() <= r2 {
            return None;
        }

        let d = p - self.eye;
        let depth = -d.dot(self.normal);
        if depth <= 0.0 {
            return None;
        }

        let sx = self.viewport.width * 0.5 + self.focal * d.dot(self.right) / depth;
        let sy = self.viewport.height * 0.5 - self.focal * d.dot(self.up) / depth;
        Some(DVec2::new(sx, sy))
    }

    fn screen_to_map(&self, screen: DVec2) -> Option<Point2D> {
        let u = (screen.x - self.viewport.width * 0.5) / self.focal;
        let v = (self.viewport.height * 0.5 - screen.y) / self.focal;
        let dir = -self.normal + self.right * u + self.up * v;

        // |eye + t * dir| = R
        let a = dir.length_squared();
        let b = self.eye.dot(dir);
        let c = self.eye.length_squared() - EARTH_RADIUS_M * EARTH_RADIUS_M;
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()) / a;
        if t <= 0.0 {
            return None;
        }

        let hit = self.eye + dir * t;
        let lat = (hit.z / EARTH_RADIUS_M).clamp(-1.0, 1.0).asin();
        let mut lon = hit.y.atan2(hit.x);
        lon += ((self.foot_lon - lon) / TAU).round() * TAU;
        Some(lon_lat_to_mercator(lon, lat))
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
