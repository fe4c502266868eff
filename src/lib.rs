//! glyphcast library crate.
//!
//! Converts raster images into ASCII art by resampling them to a character
//! grid and mapping each cell's brightness onto a glyph ramp.
//!
//! ```
//! use glyphcast::{convert, ConversionConfig, DimensionMode, FixedViewport, ImageHandle};
//! use image::{Rgb, RgbImage};
//!
//! let image = ImageHandle::from_rgb(RgbImage::from_pixel(40, 20, Rgb([0, 0, 0])));
//! let art = convert(&image, &ConversionConfig::default(), &FixedViewport::new(80, 24)).unwrap();
//! // 80 columns: (80 / 2 - 1) cells, each printed twice
//! assert!(art.lines().all(|line| line.len() == 78));
//! ```

pub mod ascii;
pub mod batch;
pub mod config;
pub mod convert;
pub mod error;
pub mod source;
pub mod viewport;

pub use ascii::{DimensionMode, ResolutionTier};
pub use convert::{convert, convert_file, ConversionConfig};
pub use error::{ConversionError, FileError};
pub use source::ImageHandle;
pub use viewport::{FixedViewport, TerminalViewport, Viewport};
