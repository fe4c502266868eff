//! ASCII renderer module for converting images to ASCII art.
//!
//! The pipeline runs in four steps:
//!
//! 1. **Dimensions** - Resolve the character grid size from an explicit size
//!    or the terminal viewport
//! 2. **Resampling** - Filter the image down to one gray value per cell
//! 3. **Quantization** - Map each gray value onto a glyph ramp
//! 4. **Rendering** - Emit each glyph twice and join rows with newlines
//!
//! # Glyph Ramps
//!
//! Three granularities are available via [`ResolutionTier`], each with a
//! normal and an inverted polarity:
//! - `Low` - 5 levels
//! - `Mid` - 9 levels
//! - `High` - 17 levels

mod dimensions;
mod grayscale;
mod quantize;
mod ramp;
mod render;
mod resample;

pub use dimensions::{resolve_dimensions, DimensionMode, RESERVED_ROWS};
pub use grayscale::{rgb_to_gray, rgb_to_gray_into};
pub use quantize::{quantize, ramp_index};
pub use ramp::{
    ResolutionTier, HIGH_RAMP, HIGH_RAMP_INVERTED, LOW_RAMP, LOW_RAMP_INVERTED, MID_RAMP,
    MID_RAMP_INVERTED,
};
pub use render::render;
pub use resample::{resample, GrayGrid};
