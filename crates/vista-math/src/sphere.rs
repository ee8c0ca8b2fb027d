//! Great-circle helpers on a sphere.

/// Solve the direct great-circle problem.
///
/// Starting at `(lon, lat)` (radians), travel `angular_distance` radians along
/// the great circle with initial `bearing` (radians clockwise from north).
/// Returns the destination `(lon, lat)` in radians. Longitude is offset from
/// the start longitude and never wrapped.
pub fn destination(lon: f64, lat: f64, bearing: f64, angular_distance: f64) -> (f64, f64) {
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_d, cos_d) = angular_distance.sin_cos();
    let (sin_b, cos_b) = bearing.sin_cos();

    let sin_lat2 = (sin_lat * cos_d + cos_lat * sin_d * cos_b).clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let dlon = (sin_b * sin_d * cos_lat).atan2(cos_d - sin_lat * sin_lat2);

    (lon + dlon, lat2)
}

/// Great-circle distance between two `(lon, lat)` pairs in radians.
/// Uses the Haversine formula. Returns distance in the unit of `radius`.
pub fn haversine_distance(a: (f64, f64), b: (f64, f64), radius: f64) -> f64 {
    let dlat = b.1 - a.1;
    let dlon = b.0 - a.0;
    let h = (dlat / 2.0).sin().powi(2) + a.1.cos() * b.1.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * radius * h.sqrt().min(1.0).asin()
}
