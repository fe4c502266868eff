//! Dimension calculation for aspect-ratio-correct ASCII rendering.
//!
//! Terminal characters are roughly twice as tall as they are wide, so every
//! grid cell is later printed as two identical glyphs. The horizontal extent
//! requested here is therefore halved up front while the height is kept.

use crate::error::ConversionError;

/// Rows left free below the art when fitting the viewport height,
/// so the shell prompt does not scroll the top of the image away.
pub const RESERVED_ROWS: i64 = 4;

/// How the output grid size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionMode {
    /// Explicit size in terminal columns and rows.
    Manual { width: u32, height: u32 },
    /// Use the full viewport height and derive the width from the image.
    FitViewportHeight,
    /// Use the full viewport width and derive the height from the image.
    #[default]
    FitViewportWidth,
}

impl DimensionMode {
    /// Whether this mode needs the terminal size to resolve.
    pub fn needs_viewport(&self) -> bool {
        !matches!(self, DimensionMode::Manual { .. })
    }

    /// Get a human-readable name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            DimensionMode::Manual { .. } => "manual",
            DimensionMode::FitViewportHeight => "fit-height",
            DimensionMode::FitViewportWidth => "fit-width",
        }
    }
}

/// Resolve the target grid size in cells.
///
/// # Arguments
/// * `mode` - Which sizing rule to apply
/// * `image_size` - Source image `(width, height)` in pixels
/// * `viewport` - Terminal `(columns, rows)`, if known
///
/// # Returns
/// `(grid_width, grid_height)`, both at least 1. The rendered text is
/// `2 * grid_width` characters wide.
///
/// # Errors
/// * `MissingViewportInfo` if an automatic mode is selected without a viewport
/// * `InvalidDimensions` if either side resolves to zero or less
///
/// # Example
/// ```
/// use glyphcast::ascii::{resolve_dimensions, DimensionMode};
///
/// let dims = resolve_dimensions(DimensionMode::FitViewportHeight, (200, 100), Some((120, 40)));
/// assert_eq!(dims.unwrap(), (80, 36));
/// ```
pub fn resolve_dimensions(
    mode: DimensionMode,
    image_size: (u32, u32),
    viewport: Option<(u16, u16)>,
) -> Result<(u32, u32), ConversionError> {
    let (img_w, img_h) = (image_size.0 as i64, image_size.1 as i64);

    let (width, height) = match mode {
        DimensionMode::Manual { width, height } => {
            if width == 0 || height == 0 {
                return Err(ConversionError::InvalidDimensions {
                    width: width as i64,
                    height: height as i64,
                });
            }
            // A requested width of 1 would halve to an empty grid
            ((width as i64 / 2).max(1), height as i64)
        }
        DimensionMode::FitViewportHeight => {
            let (_, rows) = viewport.ok_or(ConversionError::MissingViewportInfo)?;
            check_image_area(img_w, img_h)?;
            let rows = rows as i64;
            // floor(rows * (img_w / img_h)) in exact integer form
            (rows * img_w / img_h, (rows - RESERVED_ROWS).max(1))
        }
        DimensionMode::FitViewportWidth => {
            let (cols, _) = viewport.ok_or(ConversionError::MissingViewportInfo)?;
            check_image_area(img_w, img_h)?;
            let cols = cols as i64;
            // floor((cols / 2) / (img_w / img_h)) == floor(cols * img_h / (2 * img_w))
            (cols / 2 - 1, cols * img_h / (2 * img_w))
        }
    };

    log::debug!(
        "resolved {} dimensions for {}x{} image: {}x{} cells",
        mode.name(),
        img_w,
        img_h,
        width,
        height
    );

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(ConversionError::InvalidDimensions { width, height }),
    }
}

fn check_image_area(img_w: i64, img_h: i64) -> Result<(), ConversionError> {
    if img_w <= 0 || img_h <= 0 {
        return Err(ConversionError::InvalidDimensions {
            width: img_w,
            height: img_h,
        });
    }
    Ok(())
}
