//! Glyph ramp definitions for ASCII rendering.

use std::fmt;
use std::str::FromStr;

/// Low resolution ramp (5 levels), darkest (space) to brightest (@).
pub const LOW_RAMP: &[char] = &[' ', '.', '+', '#', '@'];

/// Mid resolution ramp (9 levels).
pub const MID_RAMP: &[char] = &[' ', '.', ',', ':', '+', '*', '#', '%', '@'];

/// High resolution ramp (17 levels).
pub const HIGH_RAMP: &[char] = &[
    ' ', '.', ',', ':', ';', '~', '+', '?', 't', 'x', 'X', 'C', 'm', 'o', '#', '%', '@',
];

/// Inverted low ramp, for light terminal backgrounds.
pub const LOW_RAMP_INVERTED: &[char] = &['@', '#', '+', '.', ' '];

/// Inverted mid ramp.
pub const MID_RAMP_INVERTED: &[char] = &['@', '%', '#', '*', '+', ':', ',', '.', ' '];

/// Inverted high ramp.
pub const HIGH_RAMP_INVERTED: &[char] = &[
    '@', '%', '#', 'o', 'm', 'C', 'X', 'x', 't', '?', '+', '~', ';', ':', ',', '.', ' ',
];

/// Glyph ramp granularity.
///
/// The tier only controls granularity; polarity is chosen separately
/// with the `invert` flag passed to [`ResolutionTier::ramp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionTier {
    /// 5 levels
    #[default]
    Low,
    /// 9 levels
    Mid,
    /// 17 levels
    High,
}

impl ResolutionTier {
    /// All tiers, lowest granularity first.
    pub const ALL: [ResolutionTier; 3] = [Self::Low, Self::Mid, Self::High];

    /// Get the glyph ramp for this tier and polarity.
    ///
    /// Index 0 is the glyph used for black input. With `invert` set the
    /// ramp is reversed, so black maps to the densest glyph instead.
    pub fn ramp(&self, invert: bool) -> &'static [char] {
        match (self, invert) {
            (ResolutionTier::Low, false) => LOW_RAMP,
            (ResolutionTier::Mid, false) => MID_RAMP,
            (ResolutionTier::High, false) => HIGH_RAMP,
            (ResolutionTier::Low, true) => LOW_RAMP_INVERTED,
            (ResolutionTier::Mid, true) => MID_RAMP_INVERTED,
            (ResolutionTier::High, true) => HIGH_RAMP_INVERTED,
        }
    }

    /// Number of glyphs in this tier's ramp.
    pub fn levels(&self) -> usize {
        self.ramp(false).len()
    }

    /// Get a human-readable name for the tier.
    pub fn name(&self) -> &'static str {
        match self {
            ResolutionTier::Low => "low",
            ResolutionTier::Mid => "mid",
            ResolutionTier::High => "high",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResolutionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ResolutionTier::Low),
            "mid" => Ok(ResolutionTier::Mid),
            "high" => Ok(ResolutionTier::High),
            other => Err(format!(
                "unknown resolution '{}' (expected low, mid or high)",
                other
            )),
        }
    }
}
