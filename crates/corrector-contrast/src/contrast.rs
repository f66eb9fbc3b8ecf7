//! WCAG 2.x contrast ratio and the readability check built on it.

use corrector_color::Rgb;

use crate::level::{Level, TextSize, meets};

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether `foreground` on `background` meets the level and text size.
#[must_use]
pub fn is_readable(background: Rgb, foreground: Rgb, level: Level, size: TextSize) -> bool {
    meets(contrast_ratio(background, foreground), level, size)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
