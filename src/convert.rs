//! Single-image conversion pipeline.

use std::path::Path;

use crate::ascii::{render, resample, resolve_dimensions, DimensionMode, ResolutionTier};
use crate::error::{ConversionError, FileError};
use crate::source::ImageHandle;
use crate::viewport::Viewport;

/// Settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionConfig {
    /// Glyph ramp granularity
    pub tier: ResolutionTier,
    /// Use the reversed ramp (for light terminal backgrounds)
    pub invert: bool,
    /// How the output grid is sized
    pub mode: DimensionMode,
}

impl ConversionConfig {
    /// The ramp this configuration renders with.
    pub fn ramp(&self) -> &'static [char] {
        self.tier.ramp(self.invert)
    }
}

/// Convert a loaded image to ASCII art.
///
/// The viewport is only queried when `config.mode` is automatic.
///
/// # Returns
/// `height` newline-terminated lines of `2 * width` glyphs each, where
/// `(width, height)` is the resolved grid size.
///
/// # Example
/// ```
/// use glyphcast::{convert, ConversionConfig, DimensionMode, FixedViewport, ImageHandle};
/// use image::{Rgb, RgbImage};
///
/// let image = ImageHandle::from_rgb(RgbImage::from_pixel(8, 8, Rgb([255, 255, 255])));
/// let config = ConversionConfig {
///     mode: DimensionMode::Manual { width: 4, height: 2 },
///     ..Default::default()
/// };
/// let art = convert(&image, &config, &FixedViewport::unavailable()).unwrap();
/// assert_eq!(art, "@@@@\n@@@@\n");
/// ```
pub fn convert(
    image: &ImageHandle,
    config: &ConversionConfig,
    viewport: &impl Viewport,
) -> Result<String, ConversionError> {
    let viewport_size = if config.mode.needs_viewport() {
        viewport.size()
    } else {
        None
    };

    let (width, height) = resolve_dimensions(config.mode, image.dimensions(), viewport_size)?;
    let grid = resample(image.pixels(), width, height)?;
    render(&grid, config.ramp())
}

/// Load an image file and convert it.
///
/// The path is validated before anything is opened, and the decoded image
/// is dropped before this returns.
///
/// # Errors
/// A [`FileError`] carrying `path` and the failure kind.
pub fn convert_file(
    path: &Path,
    config: &ConversionConfig,
    viewport: &impl Viewport,
) -> Result<String, FileError> {
    let image = ImageHandle::open(path).map_err(|kind| FileError::new(path, kind))?;
    convert(&image, config, viewport).map_err(|kind| FileError::new(path, kind))
}
