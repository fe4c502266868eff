//! CLI enum types for the resolution option.

use clap::ValueEnum;

use glyphcast::ascii;

/// Glyph ramp granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Resolution {
    /// 5 levels
    #[default]
    Low,
    /// 9 levels
    Mid,
    /// 17 levels
    High,
}

impl From<Resolution> for ascii::ResolutionTier {
    fn from(r: Resolution) -> Self {
        match r {
            Resolution::Low => ascii::ResolutionTier::Low,
            Resolution::Mid => ascii::ResolutionTier::Mid,
            Resolution::High => ascii::ResolutionTier::High,
        }
    }
}
