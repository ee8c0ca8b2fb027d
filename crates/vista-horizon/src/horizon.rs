//! Horizon circle around the camera's nadir.
//!
//! The visible region is approximated as a geodesic circle whose radius is
//! the surface distance to the geometric horizon. Field of view, heading and
//! tilt are ignored.

use std::f64::consts::TAU;

use vista_math::{
    EARTH_RADIUS_M, Point2D, Ring, destination, lon_lat_to_mercator, mercator_to_lon_lat,
};

use crate::HorizonError;

/// Default number of vertices on the horizon circle.
pub const DEFAULT_SEGMENTS: usize = 45;

/// Default factor applied to the horizon radius so the ring stays on the
/// visible surface.
pub const DEFAULT_SHRINK: f64 = 0.97;

/// Surface distance in meters from the nadir to the horizon for a camera
/// `altitude_m` above the reference sphere.
///
/// `acos(R / (R + h)) * R`. Altitudes that are not finite, at or below the
/// sphere's center, or that yield a non-finite radius are rejected.
pub fn horizon_radius(altitude_m: f64) -> Result<f64, HorizonError> {
    if !altitude_m.is_finite() || altitude_m <= -EARTH_RADIUS_M {
        return Err(HorizonError::DegenerateAltitude(altitude_m));
    }
    let a = EARTH_RADIUS_M / (EARTH_RADIUS_M + altitude_m);
    let radius = a.acos() * EARTH_RADIUS_M;
    if !radius.is_finite() {
        return Err(HorizonError::DegenerateAltitude(altitude_m));
    }
    Ok(radius)
}

/// Builds geodesic horizon rings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizonCircle {
    /// Number of vertices on the ring.
    pub segments: usize,
    /// Multiplier on the horizon radius (`< 1.0` pulls the ring inward).
    pub shrink: f64,
}

impl Default for HorizonCircle {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            shrink: DEFAULT_SHRINK,
        }
    }
}

impl HorizonCircle {
    pub fn new(segments: usize, shrink: f64) -> Self {
        Self { segments, shrink }
    }

    /// Build the horizon ring for a camera `altitude_m` above `footpoint`.
    ///
    /// Returns exactly `segments` vertices at evenly spaced bearings starting
    /// due north. Vertices past the antimeridian keep their unwrapped x.
    pub fn build(&self, footpoint: Point2D, altitude_m: f64) -> Result<Ring, HorizonError> {
        if self.segments < 3 {
            return Err(HorizonError::TooFewSegments(self.segments));
        }
        if !self.shrink.is_finite() || self.shrink <= 0.0 {
            return Err(HorizonError::InvalidShrink(self.shrink));
        }
        let radius = horizon_radius(altitude_m)? * self.shrink;
        let angular = radius / EARTH_RADIUS_M;
        let (lon, lat) = mercator_to_lon_lat(footpoint);

        let points = (0..self.segments)
            .map(|i| {
                let bearing = TAU * i as f64 / self.segments as f64;
                let (lon2, lat2) = destination(lon, lat, bearing, angular);
                lon_lat_to_mercator(lon2, lat2)
            })
            .collect();

        tracing::trace!(radius, segments = self.segments, "built horizon ring");
        Ok(Ring::new(points))
    }
}
