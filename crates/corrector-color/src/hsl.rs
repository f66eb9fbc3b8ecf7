// SPDX-License-Identifier: MIT
//
// HSL ↔ RGB conversion.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) follow the
// usual notation for these formulas.
#![allow(clippy::many_single_char_names)]
//
// Hue is stored as a turn fraction in [0, 1), not degrees. Conversion back
// to RGB rounds each channel half away from zero (`f64::round`) and does
// not clamp, which is why it produces a `RawRgb` instead of an `Rgb`:
// lightness pushed outside [0, 1] gives channels outside [0, 255].

use crate::hex::format_hex;
use crate::rgb::Rgb;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in hue/saturation/lightness form.
///
/// - `h`: hue as a fraction of a turn, 0.0 to 1.0 (exclusive)
/// - `s`: saturation, 0.0 to 1.0
/// - `l`: lightness, 0.0 to 1.0 for in-gamut colors
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Increase lightness by `amount`. Not clamped.
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: self.l + amount,
            ..self
        }
    }

    /// Decrease lightness by `amount`. Not clamped.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: self.l - amount,
            ..self
        }
    }

    #[must_use]
    pub fn to_rgb(self) -> RawRgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

// ─── RawRgb ──────────────────────────────────────────────────────────────────

/// Integer channels straight out of [`hsl_to_rgb`], before gamut handling.
///
/// In-gamut values convert to [`Rgb`] with [`RawRgb::to_rgb`]; anything
/// else either gets clamped ([`RawRgb::clamped`]) or is carried as-is to
/// [`RawRgb::to_hex`], which formats it without complaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawRgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl RawRgb {
    #[inline]
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies in [0, 255].
    #[must_use]
    pub fn in_gamut(self) -> bool {
        self.to_rgb().is_some()
    }

    /// The in-gamut color, or `None` if any channel is out of range.
    #[must_use]
    pub fn to_rgb(self) -> Option<Rgb> {
        Some(Rgb::new(
            u8::try_from(self.r).ok()?,
            u8::try_from(self.g).ok()?,
            u8::try_from(self.b).ok()?,
        ))
    }

    /// Clamp each channel into [0, 255].
    #[must_use]
    pub fn clamped(self) -> Rgb {
        Rgb::new(clamp_channel(self.r), clamp_channel(self.g), clamp_channel(self.b))
    }

    /// Format as `#rrggbb` without clamping. See [`format_hex`].
    #[must_use]
    pub fn to_hex(self) -> String {
        format_hex(self.r, self.g, self.b)
    }
}

impl From<Rgb> for RawRgb {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r.into(), rgb.g.into(), rgb.b.into())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(v: i32) -> u8 {
    // Safe: clamp guarantees 0 <= v <= 255 before truncation.
    v.clamp(0, 255) as u8
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Convert 8-bit sRGB channels to HSL.
///
/// When two channels tie for the maximum, hue is taken from the first of
/// red, green, blue. The checks are ordered explicitly for that reason.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let chroma = max - min;
    let s = if l > 0.5 {
        chroma / (2.0 - max - min)
    } else {
        chroma / (max + min)
    };

    let h = if max == r {
        (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL to integer RGB channels, rounding half away from zero.
///
/// Nothing is clamped: lightness outside [0, 1] yields channels outside
/// [0, 255].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RawRgb {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    RawRgb::new(scale_channel(r), scale_channel(g), scale_channel(b))
}

/// One channel of the HSL → RGB piecewise function.
///
/// `t` is wrapped into range with a single step, so it must lie in
/// (-1, 2); every call from [`hsl_to_rgb`] does for hue in [0, 1).
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn scale_channel(v: f64) -> i32 {
    // `as` saturates, so wildly out-of-range lightness cannot wrap.
    (v * 255.0).round() as i32
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn assert_hsl_close(actual: Hsl, expected: Hsl) {
        assert!(
            approx_eq(actual.h, expected.h, 1e-9)
                && approx_eq(actual.s, expected.s, 1e-9)
                && approx_eq(actual.l, expected.l, 1e-9),
            "HSL mismatch: got {actual:?}, expected {expected:?}"
        );
    }

    fn assert_roundtrip_close(r: u8, g: u8, b: u8) {
        let back = rgb_to_hsl(r, g, b).to_rgb();
        let close = |a: i32, e: u8| (a - i32::from(e)).abs() <= 1;
        assert!(
            close(back.r, r) && close(back.g, g) && close(back.b, b),
            "roundtrip mismatch: ({r}, {g}, {b}) came back as {back:?}"
        );
    }

    // ── RGB → HSL ────────────────────────────────────────────────────────

    #[test]
    fn primaries() {
        assert_hsl_close(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 1.0, 0.5));
        assert_hsl_close(rgb_to_hsl(0, 255, 0), Hsl::new(1.0 / 3.0, 1.0, 0.5));
        assert_hsl_close(rgb_to_hsl(0, 0, 255), Hsl::new(2.0 / 3.0, 1.0, 0.5));
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        let gray = rgb_to_hsl(128, 128, 128);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx_eq(gray.l, 128.0 / 255.0, 1e-12));
    }

    #[test]
    fn red_max_with_green_below_blue_wraps_hue() {
        // Magenta-ish red: g < b adds a full turn before dividing by 6.
        let hsl = rgb_to_hsl(255, 0, 128);
        assert!(hsl.h > 0.9 && hsl.h < 1.0, "hue: {}", hsl.h);
    }

    #[test]
    fn saturation_branches_on_lightness() {
        // Dark: chroma / (max + min)
        let dark = rgb_to_hsl(100, 50, 50);
        assert!(approx_eq(dark.s, (50.0 / 255.0) / (150.0 / 255.0), 1e-12));
        // Light: chroma / (2 - max - min)
        let light = rgb_to_hsl(250, 200, 200);
        let expected = (50.0 / 255.0) / (2.0 - 450.0 / 255.0);
        assert!(approx_eq(light.s, expected, 1e-12));
    }

    #[test]
    fn red_wins_ties_with_green() {
        // Yellow: red and green tie for max, red branch gives h = 1/6.
        assert_hsl_close(rgb_to_hsl(255, 255, 0), Hsl::new(1.0 / 6.0, 1.0, 0.5));
    }

    #[test]
    fn green_wins_ties_with_blue() {
        // Cyan: green and blue tie, green branch gives h = 3/6.
        assert_hsl_close(rgb_to_hsl(0, 255, 255), Hsl::new(0.5, 1.0, 0.5));
    }

    #[test]
    fn red_wins_ties_with_blue() {
        // Magenta: red branch, g < b, h = (0 - 1)/1 + 6 = 5 → 5/6.
        assert_hsl_close(rgb_to_hsl(255, 0, 255), Hsl::new(5.0 / 6.0, 1.0, 0.5));
    }

    // ── HSL → RGB ────────────────────────────────────────────────────────

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.5), RawRgb::new(128, 128, 128));
    }

    #[test]
    fn hue_to_rgb_segments() {
        let (p, q) = (0.2, 0.8);
        assert!(approx_eq(hue_to_rgb(p, q, 0.0), p, 1e-12));
        assert!(approx_eq(hue_to_rgb(p, q, 1.0 / 12.0), 0.5, 1e-12));
        assert!(approx_eq(hue_to_rgb(p, q, 0.3), q, 1e-12));
        assert!(approx_eq(hue_to_rgb(p, q, 7.0 / 12.0), 0.5, 1e-12));
        assert!(approx_eq(hue_to_rgb(p, q, 0.9), p, 1e-12));
    }

    #[test]
    fn hue_to_rgb_wraps_once() {
        let (p, q) = (0.1, 0.9);
        assert!(approx_eq(hue_to_rgb(p, q, -0.7), hue_to_rgb(p, q, 0.3), 1e-12));
        assert!(approx_eq(hue_to_rgb(p, q, 1.3), hue_to_rgb(p, q, 0.3), 1e-12));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.5 * 255 = 127.5 rounds up.
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.5), RawRgb::new(128, 128, 128));
        // -0.5 * 255 = -127.5 rounds down.
        assert_eq!(hsl_to_rgb(0.0, 0.0, -0.5).r, -128);
    }

    #[test]
    fn lightness_out_of_range_is_not_clamped() {
        let below = hsl_to_rgb(0.0, 0.0, -0.1);
        assert!(below.r < 0 && !below.in_gamut());
        let above = hsl_to_rgb(0.0, 0.0, 1.1);
        assert!(above.r > 255 && !above.in_gamut());
    }

    #[test]
    fn hsl_lighten_and_darken_do_not_clamp() {
        let hsl = Hsl::new(0.0, 0.0, 0.99);
        assert!(approx_eq(hsl.lighten(0.05).l, 1.04, 1e-12));
        assert!(approx_eq(Hsl::new(0.0, 0.0, 0.01).darken(0.05).l, -0.04, 1e-12));
    }

    // ── RawRgb ───────────────────────────────────────────────────────────

    #[test]
    fn raw_to_rgb_only_in_gamut() {
        assert_eq!(RawRgb::new(0, 128, 255).to_rgb(), Some(Rgb::new(0, 128, 255)));
        assert_eq!(RawRgb::new(-1, 0, 0).to_rgb(), None);
        assert_eq!(RawRgb::new(0, 256, 0).to_rgb(), None);
    }

    #[test]
    fn raw_clamped_saturates() {
        assert_eq!(RawRgb::new(-3, 300, 42).clamped(), Rgb::new(0, 255, 42));
    }

    #[test]
    fn raw_to_hex_is_unclamped() {
        assert_eq!(RawRgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(RawRgb::new(258, 0, 0).to_hex(), "#1020000");
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn roundtrip_named_colors() {
        for (r, g, b) in [
            (0, 0, 0),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (0, 255, 255),
            (255, 0, 255),
            (30, 41, 59),
            (119, 119, 119),
        ] {
            assert_roundtrip_close(r, g, b);
        }
    }

    #[test]
    fn roundtrip_coarse_grid() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    assert_roundtrip_close(r, g, b);
                }
            }
        }
    }
}
