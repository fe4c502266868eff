//! Resampling source pixels down to a grayscale character grid.
//!
//! The filter is a separable Catmull-Rom cubic. When shrinking, its support
//! is stretched by the scale factor so every output cell integrates its whole
//! footprint in the source, rather than point-sampling it. Taps that fall
//! outside the image are mirrored back in (wrap-with-flip), which keeps the
//! border cells from being pulled toward black or a clamped edge color.

use image::RgbImage;

use super::grayscale::rgb_to_gray_into;
use crate::error::ConversionError;

/// Half-width of the cubic kernel at unit scale.
const CUBIC_SUPPORT: f32 = 2.0;

/// Catmull-Rom tension parameter.
const CUBIC_A: f32 = -0.5;

/// Grayscale values for each character cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<u8>,
}

impl GrayGrid {
    /// Brightness values of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Whether the cell buffer matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.width as usize * self.height as usize
    }
}

/// One contributing source index and its normalized weight.
type Tap = (usize, f32);

/// Resample an RGB image to a `width` x `height` grayscale grid.
///
/// Each cell is the rounded channel mean of the filtered RGB value.
///
/// # Errors
/// `ResampleError` if the target or the source has zero area.
pub fn resample(image: &RgbImage, width: u32, height: u32) -> Result<GrayGrid, ConversionError> {
    let (src_w, src_h) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ConversionError::ResampleError(format!(
            "cannot resample to an empty {}x{} grid",
            width, height
        )));
    }
    if src_w == 0 || src_h == 0 {
        return Err(ConversionError::ResampleError(format!(
            "source image has no pixels ({}x{})",
            src_w, src_h
        )));
    }

    let h_taps = axis_taps(src_w, width);
    let v_taps = axis_taps(src_h, height);
    let src = image.as_raw();
    let (sw, dw) = (src_w as usize, width as usize);

    // Horizontal pass: src_h rows of `width` filtered pixels
    let mut horizontal = vec![0f32; src_h as usize * dw * 3];
    for y in 0..src_h as usize {
        let row = &src[y * sw * 3..(y + 1) * sw * 3];
        for (x, taps) in h_taps.iter().enumerate() {
            let out = &mut horizontal[(y * dw + x) * 3..(y * dw + x) * 3 + 3];
            for &(idx, weight) in taps {
                let px = &row[idx * 3..idx * 3 + 3];
                for c in 0..3 {
                    out[c] += px[c] as f32 * weight;
                }
            }
        }
    }

    // Vertical pass into packed RGB
    let mut rgb = Vec::with_capacity(dw * height as usize * 3);
    for taps in &v_taps {
        for x in 0..dw {
            let mut acc = [0f32; 3];
            for &(idx, weight) in taps {
                let base = (idx * dw + x) * 3;
                for c in 0..3 {
                    acc[c] += horizontal[base + c] * weight;
                }
            }
            rgb.extend(acc.iter().map(|v| v.round().clamp(0.0, 255.0) as u8));
        }
    }

    let mut cells = Vec::new();
    rgb_to_gray_into(&rgb, &mut cells);

    Ok(GrayGrid {
        width,
        height,
        cells,
    })
}

/// Precompute filter taps for every output position along one axis.
fn axis_taps(src_len: u32, dst_len: u32) -> Vec<Vec<Tap>> {
    let scale = src_len as f32 / dst_len as f32;
    let filter_scale = scale.max(1.0);
    let support = CUBIC_SUPPORT * filter_scale;

    (0..dst_len)
        .map(|i| {
            // Align pixel centers, not edges
            let center = (i as f32 + 0.5) * scale - 0.5;
            let start = (center - support).floor() as i64;
            let end = (center + support).ceil() as i64;

            let mut taps: Vec<Tap> = Vec::with_capacity((end - start + 1) as usize);
            let mut total = 0.0;
            for j in start..=end {
                let weight = cubic((j as f32 - center) / filter_scale);
                if weight == 0.0 {
                    continue;
                }
                taps.push((mirror_index(j, src_len), weight));
                total += weight;
            }

            if total != 0.0 {
                for tap in &mut taps {
                    tap.1 /= total;
                }
            }
            taps
        })
        .collect()
}

/// Catmull-Rom cubic convolution kernel.
#[inline]
fn cubic(x: f32) -> f32 {
    let x = x.abs();
    if x < 1.0 {
        (CUBIC_A + 2.0) * x * x * x - (CUBIC_A + 3.0) * x * x + 1.0
    } else if x < 2.0 {
        CUBIC_A * x * x * x - 5.0 * CUBIC_A * x * x + 8.0 * CUBIC_A * x - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

/// Map any integer coordinate onto `0..len` by tiling mirrored copies.
///
/// `-1` maps to `0`, `len` maps to `len - 1`, and so on outward.
#[inline]
pub(crate) fn mirror_index(i: i64, len: u32) -> usize {
    let n = len as i64;
    let m = i.rem_euclid(2 * n);
    (if m >= n { 2 * n - 1 - m } else { m }) as usize
}
