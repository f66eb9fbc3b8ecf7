// SPDX-License-Identifier: MIT

//! WCAG 2.x relative luminance and the cheaper luma heuristic.
//!
//! [`relative_luminance`] is the quantity contrast ratios are built from.
//! [`luma`] skips gamma correction entirely and is only used to decide
//! whether a color reads as light or dark.

/// Linearization threshold from the WCAG 2.0 text.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Luma at or above which a color counts as light.
pub const LIGHT_LUMA: f64 = 128.0;

/// Convert an 8-bit sRGB channel to linear light (remove gamma).
///
/// Values at or below the threshold pass through unscaled.
#[inline]
#[must_use]
pub fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB triplet per WCAG 2.x.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.2126f64.mul_add(
        linearize(r),
        0.7152f64.mul_add(linearize(g), 0.0722 * linearize(b)),
    )
}

/// Non-linear luma over raw 0–255 channels, in [0.0, 255.0].
#[must_use]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.2126f64.mul_add(
        f64::from(r),
        0.7152f64.mul_add(f64::from(g), 0.0722 * f64::from(b)),
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────
