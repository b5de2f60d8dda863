//! Error types for the icon generator

use thiserror::Error;

/// Result type alias for icon generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem error (output directory creation or file write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failed
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
