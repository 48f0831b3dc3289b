//! Unified error type for icongen.

use thiserror::Error;

/// Errors that can occur while generating icons.
#[derive(Debug, Error)]
pub enum IconError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG encoder rejected the canvas.
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// A request asked for a zero-sized icon.
    #[error("Invalid icon size {0}: must be greater than zero")]
    InvalidSize(u32),

    /// PNG encoding is not available in this build.
    #[error("PNG encoder unavailable")]
    EncoderUnavailable,
}
