// SPDX-License-Identifier: MIT
//
// color-corrector — WCAG contrast checks and readability correction.
//
// This is the string-facing facade that wires the two member crates
// together:
//
//   corrector-color    → hex codec, Rgb, relative luminance, HSL
//   corrector-contrast → contrast ratio, (level, size) table, make_readable
//
// Every function here takes hex strings (`#rrggbb` or `rrggbb`), parses
// them up front, and reports a malformed color as `Error::InvalidFormat`
// before doing any arithmetic.
//
//   use color_corrector::{Level, TextSize};
//
//   let bg = color_corrector::make_readable("#777777", "#ffffff", Level::AA, TextSize::Small)?;
//   assert!(color_corrector::is_readable(&bg, "#ffffff", Level::AA, TextSize::Small)?);

pub use corrector_color::{HexErrorKind, Hsl, ParseHexError, RawRgb, Rgb};
pub use corrector_contrast::adjust::{DEFAULT_MAX_ITERATIONS, DEFAULT_STEP};
pub use corrector_contrast::{
    AdjustConfig, Adjustment, Direction, Error, Gamut, Level, Result, TextSize, required_ratio,
};

use corrector_contrast::adjust;

/// Default lightness change for [`darken`] and [`lighten`].
pub const DEFAULT_AMOUNT: f64 = DEFAULT_STEP;

/// WCAG contrast ratio between two hex colors, in [1.0, 21.0].
///
/// # Errors
///
/// [`Error::InvalidFormat`] if either color is not `#rrggbb`.
pub fn contrast_ratio(background: &str, foreground: &str) -> Result<f64> {
    let (bg, fg) = parse_pair(background, foreground)?;
    Ok(corrector_contrast::contrast_ratio(bg, fg))
}

/// Whether `foreground` on `background` meets `level` at `size`.
///
/// Pass `Level::default()` and `TextSize::default()` for AA large.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if either color is not `#rrggbb`.
pub fn is_readable(background: &str, foreground: &str, level: Level, size: TextSize) -> Result<bool> {
    let (bg, fg) = parse_pair(background, foreground)?;
    Ok(corrector_contrast::is_readable(bg, fg, level, size))
}

/// Darken a hex color by `amount` of HSL lightness.
///
/// The result is not clamped: pushing lightness below zero produces a
/// string that no longer parses as a color.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `color` is not `#rrggbb`.
pub fn darken(color: &str, amount: f64) -> Result<String> {
    Ok(adjust::darken(color.parse()?, amount).to_hex())
}

/// Lighten a hex color by `amount` of HSL lightness. Not clamped.
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `color` is not `#rrggbb`.
pub fn lighten(color: &str, amount: f64) -> Result<String> {
    Ok(adjust::lighten(color.parse()?, amount).to_hex())
}

/// Adjust `background` until `foreground` on it is readable, returning the
/// new background as `#rrggbb`.
///
/// Uses [`AdjustConfig::default`]: 0.01 steps, at most 10 000 of them, no
/// clamping.
///
/// # Errors
///
/// [`Error::InvalidFormat`] for a malformed color, [`Error::NonConvergence`]
/// if no readable background is reached.
pub fn make_readable(
    background: &str,
    foreground: &str,
    level: Level,
    size: TextSize,
) -> Result<String> {
    make_readable_with(background, foreground, level, size, &AdjustConfig::default())
        .map(|adjustment| adjustment.color.to_string())
}

/// [`make_readable`] with explicit tuning, returning the full [`Adjustment`].
///
/// # Errors
///
/// Same as [`make_readable`].
pub fn make_readable_with(
    background: &str,
    foreground: &str,
    level: Level,
    size: TextSize,
    config: &AdjustConfig,
) -> Result<Adjustment> {
    let (bg, fg) = parse_pair(background, foreground)?;
    corrector_contrast::make_readable(bg, fg, level, size, config)
}

/// WCAG relative luminance of 8-bit channels.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    corrector_color::luminance::relative_luminance(r, g, b)
}

/// Whether a hex color reads as light (raw luma >= 128).
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `color` is not `#rrggbb`.
pub fn is_light(color: &str) -> Result<bool> {
    Ok(color.parse::<Rgb>()?.is_light())
}

/// Whether a hex color reads as dark. The complement of [`is_light`].
///
/// # Errors
///
/// [`Error::InvalidFormat`] if `color` is not `#rrggbb`.
pub fn is_dark(color: &str) -> Result<bool> {
    Ok(color.parse::<Rgb>()?.is_dark())
}

fn parse_pair(background: &str, foreground: &str) -> Result<(Rgb, Rgb)> {
    Ok((background.parse()?, foreground.parse()?))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
