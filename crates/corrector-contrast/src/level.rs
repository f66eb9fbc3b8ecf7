//! WCAG conformance targets and the ratios they require.
//!
//! | Level | Small text | Large text |
//! |-------|-----------:|-----------:|
//! | AA    |        4.5 |        3.0 |
//! | AAA   |        7.0 |        4.5 |

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// WCAG conformance level.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    #[default]
    AA,
    AAA,
}

/// Text-size class. WCAG relaxes the requirement for large text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextSize {
    Small,
    #[default]
    Large,
}

/// Minimum contrast ratio for a level and text size.
#[must_use]
pub const fn required_ratio(level: Level, size: TextSize) -> f64 {
    match (level, size) {
        (Level::AA, TextSize::Large) => 3.0,
        (Level::AAA, TextSize::Small) => 7.0,
        (Level::AA, TextSize::Small) | (Level::AAA, TextSize::Large) => 4.5,
    }
}

/// Whether `ratio` satisfies the level and text size. The boundary passes.
#[must_use]
pub fn meets(ratio: f64, level: Level, size: TextSize) -> bool {
    ratio >= required_ratio(level, size)
}

impl Level {
    /// Required ratio for this level at the given text size.
    #[must_use]
    pub const fn required_ratio(self, size: TextSize) -> f64 {
        required_ratio(self, size)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            _ => Err(Error::InvalidLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AA => "AA",
            Self::AAA => "AAA",
        })
    }
}

impl FromStr for TextSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "large" => Ok(Self::Large),
            _ => Err(Error::InvalidSize(s.to_owned())),
        }
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Small => "small",
            Self::Large => "large",
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
