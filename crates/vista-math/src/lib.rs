//! Planar and spherical geometry primitives for Web Mercator overview maps.

mod extent;
mod mercator;
mod path;
mod sphere;

pub use extent::Extent;
pub use mercator::{
    EARTH_RADIUS_M, WEB_MERCATOR_MAX_X, WEB_MERCATOR_MIN_X, WEB_MERCATOR_WKIDS,
    WEB_MERCATOR_WORLD_WIDTH, is_web_mercator, lon_lat_to_mercator, mercator_to_lon_lat,
};
pub use path::{MultiPath, Path, Ring};
pub use sphere::{destination, haversine_distance};

/// A point in the planar map coordinate system (Web Mercator meters).
pub type Point2D = glam::DVec2;
