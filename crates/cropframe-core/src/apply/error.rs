use thiserror::Error;

/// Errors from turning a committed crop into output pixels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplyError {
    /// The source image has no pixels.
    #[error("Source image has zero width or height")]
    ZeroDimensions,

    /// The pixel buffer does not hold `width * height * 3` bytes.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The crop covers less than one pixel on some axis.
    #[error("Crop is empty in pixel space: {width}x{height}")]
    EmptyCrop { width: f64, height: f64 },

    /// The external rasterizer reported a failure.
    #[error("Rasterizer failed: {0}")]
    Rasterizer(String),
}
