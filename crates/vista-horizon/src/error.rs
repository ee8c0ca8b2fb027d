//! Visible-earth pipeline error types.

/// Errors that prevent the visible-earth geometry from being built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HorizonError {
    /// Camera altitude is non-finite or at/below the sphere's center.
    #[error("degenerate camera altitude: {0} m")]
    DegenerateAltitude(f64),

    /// A horizon circle needs at least three vertices.
    #[error("horizon circle needs at least 3 segments, got {0}")]
    TooFewSegments(usize),

    /// Horizon shrink factor is not finite and positive.
    #[error("invalid horizon shrink factor: {0}")]
    InvalidShrink(f64),

    /// Camera position is not in Web Mercator.
    #[error("unsupported spatial reference: wkid {0}")]
    UnsupportedSpatialReference(u32),
}
