// SPDX-License-Identifier: MIT

//! The 8-bit sRGB triplet every hex color parses into.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseHexError;
use crate::hex::parse_hex;
use crate::hsl::{Hsl, rgb_to_hsl};
use crate::luminance::{self, LIGHT_LUMA};

/// An in-gamut sRGB color with 8-bit channels.
///
/// Parses from `#rrggbb` or `rrggbb` and displays as lowercase `#rrggbb`,
/// so a parsed color always formats back to the same string (modulo case
/// and the optional `#`).
///
/// ```
/// use corrector_color::Rgb;
///
/// let slate: Rgb = "#1E293B".parse().unwrap();
/// assert_eq!(slate, Rgb::new(30, 41, 59));
/// assert_eq!(slate.to_string(), "#1e293b");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color. Same as [`str::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseHexError`] if `s` is not six hex digits with an
    /// optional leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, ParseHexError> {
        parse_hex(s)
    }

    #[inline]
    #[must_use]
    pub const fn to_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// WCAG relative luminance, in [0.0, 1.0].
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        luminance::relative_luminance(self.r, self.g, self.b)
    }

    /// Non-linear luma over the raw channels, in [0.0, 255.0].
    #[must_use]
    pub fn luma(self) -> f64 {
        luminance::luma(self.r, self.g, self.b)
    }

    /// Whether the color reads as light (luma >= 128).
    #[must_use]
    pub fn is_light(self) -> bool {
        self.luma() >= LIGHT_LUMA
    }

    /// Whether the color reads as dark. Always `!self.is_light()`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        !self.is_light()
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({self})")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
