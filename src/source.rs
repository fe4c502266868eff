//! Image file validation and loading.
//!
//! An [`ImageHandle`] owns the decoded pixels for exactly one conversion.
//! The buffer is freed when the handle goes out of scope, whichever way the
//! conversion ends.

use std::path::{Path, PathBuf};

use image::{ImageReader, RgbImage};

use crate::error::ConversionError;

/// File extensions accepted for conversion (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tiff"];

/// Lowercased extension of `path`, or an empty string if it has none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Check whether a path has a supported image extension.
///
/// Only looks at the name; the file is not touched.
pub fn is_supported(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Pre-flight checks run before any file is opened.
///
/// The extension is checked first, so an unsupported name is rejected even
/// if the file does not exist.
///
/// # Errors
/// * `UnsupportedFormat` if the extension is not in [`SUPPORTED_EXTENSIONS`]
/// * `FileNotFound` if the path is not an existing regular file
pub fn validate_path(path: &Path) -> Result<(), ConversionError> {
    if !is_supported(path) {
        return Err(ConversionError::UnsupportedFormat {
            extension: extension_of(path),
        });
    }
    if !path.is_file() {
        return Err(ConversionError::FileNotFound);
    }
    Ok(())
}

/// Decoded RGB pixels of one source image.
#[derive(Debug)]
pub struct ImageHandle {
    pixels: RgbImage,
    path: Option<PathBuf>,
}

impl ImageHandle {
    /// Validate, open and decode an image file.
    ///
    /// # Errors
    /// Any error from [`validate_path`], `IoError` if the file cannot be
    /// read, or `DecodeError` if its bytes do not parse as an image.
    pub fn open(path: &Path) -> Result<Self, ConversionError> {
        validate_path(path)?;

        let decoded = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(ConversionError::DecodeError)?;

        let pixels = decoded.to_rgb8();
        log::trace!(
            "acquired {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        Ok(Self {
            pixels,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory image.
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels, path: None }
    }

    /// Source `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Borrow the underlying pixel buffer.
    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// The file this image was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        match &self.path {
            Some(path) => log::trace!("released {}", path.display()),
            None => log::trace!("released in-memory image"),
        }
    }
}
