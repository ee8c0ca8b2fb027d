//! Spherical Web Mercator constants and conversions.

use std::f64::consts::FRAC_PI_4;

use crate::Point2D;

/// Radius of the reference sphere in meters (WGS84 semi-major axis).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Web Mercator easting of the antimeridian (+180°).
pub const WEB_MERCATOR_MAX_X: f64 = 20_037_508.342_788_905;

/// Web Mercator easting of the antimeridian (-180°).
pub const WEB_MERCATOR_MIN_X: f64 = -WEB_MERCATOR_MAX_X;

/// Full width of the Web Mercator world in meters.
pub const WEB_MERCATOR_WORLD_WIDTH: f64 = 2.0 * WEB_MERCATOR_MAX_X;

/// Well-known ids that all denote spherical Web Mercator.
pub const WEB_MERCATOR_WKIDS: [u32; 4] = [3857, 102100, 102113, 900913];

/// Returns true if `wkid` is one of the Web Mercator spatial reference ids.
pub fn is_web_mercator(wkid: u32) -> bool {
    WEB_MERCATOR_WKIDS.contains(&wkid)
}

/// Convert a Web Mercator point to `(longitude, latitude)` in radians.
///
/// Longitude is not wrapped: x beyond ±maxX yields |lon| > π.
pub fn mercator_to_lon_lat(p: Point2D) -> (f64, f64) {
    let lon = p.x / EARTH_RADIUS_M;
    let lat = 2.0 * (p.y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2;
    (lon, lat)
}

/// Convert `(longitude, latitude)` in radians to a Web Mercator point.
///
/// Longitude is not wrapped, so the result may lie outside ±maxX.
pub fn lon_lat_to_mercator(lon: f64, lat: f64) -> Point2D {
    let x = lon * EARTH_RADIUS_M;
    let y = (FRAC_PI_4 + lat * 0.5).tan().ln() * EARTH_RADIUS_M;
    Point2D::new(x, y)
}
