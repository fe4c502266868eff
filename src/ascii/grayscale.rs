//! RGB to grayscale conversion by channel averaging.

/// Average the three channels of an RGB pixel, rounding to nearest.
///
/// `(r + g + b) / 3` never lands exactly on a half, so adding one before
/// the integer division is the same as rounding.
#[inline]
pub fn rgb_to_gray(rgb: [u8; 3]) -> u8 {
    let sum = rgb[0] as u32 + rgb[1] as u32 + rgb[2] as u32;
    ((sum + 1) / 3) as u8
}

/// Convert packed RGB data to grayscale, reusing an existing buffer.
///
/// # Arguments
/// * `data` - RGB triplets, row-major
/// * `buffer` - A mutable buffer to store grayscale values
///
/// # Returns
/// The number of pixels written to the buffer
pub fn rgb_to_gray_into(data: &[u8], buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(data.len() / 3);

    for rgb in data.chunks_exact(3) {
        buffer.push(rgb_to_gray([rgb[0], rgb[1], rgb[2]]));
    }

    buffer.len()
}
