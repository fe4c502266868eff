//! Assemble a quantized grid into the final text block.

use super::quantize::quantize;
use super::resample::GrayGrid;
use crate::error::ConversionError;

/// Render a grayscale grid as newline-terminated rows of doubled glyphs.
///
/// Each cell becomes two identical characters so the monospaced output
/// keeps the image's proportions. The result has `grid.height` lines of
/// `2 * grid.width` characters.
///
/// # Errors
/// `QuantizeError` if the ramp is empty or the grid is malformed.
pub fn render(grid: &GrayGrid, ramp: &[char]) -> Result<String, ConversionError> {
    if ramp.is_empty() {
        return Err(ConversionError::QuantizeError("glyph ramp is empty".to_string()));
    }
    if !grid.is_well_formed() {
        return Err(ConversionError::QuantizeError(format!(
            "grid holds {} cells, expected {}x{}",
            grid.cells.len(),
            grid.width,
            grid.height
        )));
    }

    let row_bytes: usize = ramp.iter().map(|c| c.len_utf8()).max().unwrap_or(1) * 2;
    let mut out =
        String::with_capacity((grid.width as usize * row_bytes + 1) * grid.height as usize);

    for y in 0..grid.height {
        for &gray in grid.row(y) {
            let glyph = quantize(gray, ramp).ok_or_else(|| {
                ConversionError::QuantizeError(format!("no glyph for brightness {}", gray))
            })?;
            out.push(glyph);
            out.push(glyph);
        }
        out.push('\n');
    }

    Ok(out)
}
