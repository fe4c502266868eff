//! Brightness to glyph quantization.

/// Pick the ramp index for a brightness value.
///
/// The 0-255 range is split into `levels` equal buckets of `256 / levels`
/// each, so `floor(gray / (256 / levels))` is computed exactly as
/// `gray * levels / 256`. The result is clamped to the last bucket.
#[inline]
pub fn ramp_index(gray: u8, levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    (gray as usize * levels / 256).min(levels - 1)
}

/// Map a brightness value to a glyph from `ramp`.
///
/// Returns `None` only for an empty ramp.
///
/// # Example
/// ```
/// use glyphcast::ascii::{quantize, LOW_RAMP};
///
/// assert_eq!(quantize(0, LOW_RAMP), Some(' '));
/// assert_eq!(quantize(128, LOW_RAMP), Some('+'));
/// assert_eq!(quantize(255, LOW_RAMP), Some('@'));
/// ```
#[inline]
pub fn quantize(gray: u8, ramp: &[char]) -> Option<char> {
    ramp.get(ramp_index(gray, ramp.len())).copied()
}
