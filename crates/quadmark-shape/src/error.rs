//! Error types for rendering shapes to raster images.

use thiserror::Error;

/// Errors raised by `PixmapPainter`.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The requested surface cannot be allocated.
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Encoding or decoding an image failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
