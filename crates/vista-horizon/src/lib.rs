//! Visible-earth overview: horizon circle, viewport clamping, antimeridian
//! splitting, and overview framing for a camera looking down at the globe.
//!
//! Each camera change runs the pipeline
//! [`HorizonCircle::build`] → [`clamp_to_viewport`] → [`split_ring`] →
//! [`overview_extent`], and [`OverviewTracker`] publishes the result to a
//! secondary [`OverviewSink`].

mod antimeridian;
mod clamp;
mod error;
mod horizon;
mod nadir;
mod overview;
mod tracker;

pub use antimeridian::{normalize_x, split_ring};
pub use clamp::{ScreenProjector, Viewport, clamp_to_viewport};
pub use error::HorizonError;
pub use horizon::{DEFAULT_SEGMENTS, DEFAULT_SHRINK, HorizonCircle, horizon_radius};
pub use nadir::NadirCamera;
pub use overview::{DEFAULT_GROW_FACTOR, FALLBACK_GROW_FACTOR, overview_extent};
pub use tracker::{
    CameraMarker, CameraPose, CameraPosition, DashPattern, LineStyle, OverviewSink,
    OverviewTracker, VisibleEarth,
};
