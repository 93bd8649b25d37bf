// Error types. Every variant states *where* things went wrong.
use thiserror::Error;

/// Fatal errors: any of these ends the process with exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed

    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the pixel buffer to the window failed

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] image::ImageError), // Encoding/writing a PNG failed

    #[error("Invalid config: {0}")]
    InvalidConfig(String), // Command-line values we cannot draw with
}

/// Why a frame's tangents or fill were skipped.
/// None of these are fatal; the renderer logs them and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("circle centers coincide")]
    Coincident,

    #[error("one circle contains the other (distance {distance:.2} < radius gap {radius_gap:.2})")]
    Contained { distance: f64, radius_gap: f64 },

    #[error("contact points coincide, tangent has no direction")]
    Degenerate,

    #[error("tangent is vertical, no slope to scan")]
    VerticalTangent,
}
