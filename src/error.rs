//! Error types for image conversion.

use std::path::PathBuf;

/// Errors that can occur while converting a single image.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("file not found")]
    FileNotFound,

    #[error("unsupported image format '{extension}' (expected bmp, gif, jpeg, jpg, png or tiff)")]
    UnsupportedFormat {
        /// Lowercased extension, empty when the path has none
        extension: String,
    },

    #[error("failed to decode image: {0}")]
    DecodeError(#[source] image::ImageError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("terminal size unavailable; pass --width and --height instead")]
    MissingViewportInfo,

    #[error("invalid output dimensions {width}x{height}")]
    InvalidDimensions {
        /// Resolved width in characters
        width: i64,
        /// Resolved height in characters
        height: i64,
    },

    #[error("resampling failed: {0}")]
    ResampleError(String),

    #[error("quantization failed: {0}")]
    QuantizeError(String),
}

/// A [`ConversionError`] tagged with the file it came from.
#[derive(Debug, thiserror::Error)]
#[error("{}: {kind}", path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub kind: ConversionError,
}

impl FileError {
    pub fn new(path: impl Into<PathBuf>, kind: ConversionError) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}
