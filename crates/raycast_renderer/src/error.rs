//! Errors raised by camera setup and image output.

use thiserror::Error;

/// Errors that can occur while setting up a render or writing its output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid resolution {width}x{height} (both must be positive)")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid field of view {0} rad (must be inside (0, pi))")]
    InvalidFov(f32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
