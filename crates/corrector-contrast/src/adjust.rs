//! Readability correction: walk a background's HSL lightness until the
//! foreground on top of it meets the required contrast ratio.
//!
//! The walk uses a fixed step (0.01 by default) in a fixed direction:
//! a light foreground darkens the background, a dark foreground lightens
//! it. Each step is re-quantized to 8-bit channels before the ratio is
//! measured again, so the loop only ever visits real hex colors.
//!
//! Nothing guarantees a passing color exists in the chosen direction
//! (mid-gray text cannot reach 7:1 against any background), so the loop is
//! capped and reports [`Error::NonConvergence`] when it gives up.

use corrector_color::{RawRgb, Rgb};
use log::{debug, trace, warn};

use crate::contrast::contrast_ratio;
use crate::error::{Error, Result};
use crate::level::{Level, TextSize, required_ratio};

/// Lightness change per step.
pub const DEFAULT_STEP: f64 = 0.01;

/// Steps before giving up. 0.01 crosses the whole lightness range in 100.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

// ─── Configuration ──────────────────────────────────────────────────────────

/// What to do with a step that lands outside the sRGB gamut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gamut {
    /// Keep the raw channels. An out-of-range step ends the walk.
    #[default]
    Unclamped,
    /// Clamp channels into [0, 255] and keep walking.
    Clamp,
}

/// Tuning for [`make_readable`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdjustConfig {
    /// Lightness delta per step.
    pub step: f64,
    /// Upper bound on the number of steps.
    pub max_iterations: usize,
    pub gamut: Gamut,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gamut: Gamut::Unclamped,
        }
    }
}

impl AdjustConfig {
    #[must_use]
    pub const fn with_step(self, step: f64) -> Self {
        Self { step, ..self }
    }

    #[must_use]
    pub const fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    #[must_use]
    pub const fn with_gamut(self, gamut: Gamut) -> Self {
        Self { gamut, ..self }
    }
}

// ─── Direction ──────────────────────────────────────────────────────────────

/// Which way the background's lightness moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Darken,
    Lighten,
}

impl Direction {
    /// Darken behind light text, lighten behind dark text.
    #[must_use]
    pub fn for_foreground(foreground: Rgb) -> Self {
        if foreground.is_light() {
            Self::Darken
        } else {
            Self::Lighten
        }
    }

    /// Move `color` by `amount` of HSL lightness in this direction.
    #[must_use]
    pub fn apply(self, color: Rgb, amount: f64) -> RawRgb {
        match self {
            Self::Darken => darken(color, amount),
            Self::Lighten => lighten(color, amount),
        }
    }
}

/// Decrease HSL lightness by `amount`. Not clamped.
#[must_use]
pub fn darken(color: Rgb, amount: f64) -> RawRgb {
    color.to_hsl().darken(amount).to_rgb()
}

/// Increase HSL lightness by `amount`. Not clamped.
#[must_use]
pub fn lighten(color: Rgb, amount: f64) -> RawRgb {
    color.to_hsl().lighten(amount).to_rgb()
}

// ─── make_readable ──────────────────────────────────────────────────────────

/// Result of a successful [`make_readable`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustment {
    /// First background that met the target.
    pub color: Rgb,
    /// Steps taken. Zero if the input was already readable.
    pub steps: usize,
    pub direction: Direction,
    /// Contrast ratio of `color` against the foreground.
    pub ratio: f64,
}

/// Adjust `background` until `foreground` on it meets `level` and `size`.
///
/// Returns `background` untouched (with `steps == 0`) if it already passes.
///
/// # Errors
///
/// [`Error::NonConvergence`] if `config.max_iterations` steps are taken
/// without passing, or if under [`Gamut::Unclamped`] a step leaves the
/// sRGB gamut.
pub fn make_readable(
    background: Rgb,
    foreground: Rgb,
    level: Level,
    size: TextSize,
    config: &AdjustConfig,
) -> Result<Adjustment> {
    let required = required_ratio(level, size);
    let direction = Direction::for_foreground(foreground);

    let mut color = background;
    let mut ratio = contrast_ratio(color, foreground);
    let mut steps = 0;

    if ratio < required {
        debug!(
            "make_readable: {background} under {foreground} at {ratio:.3}, need {required} ({level} {size}), {direction:?}"
        );
    }

    while ratio < required {
        if steps >= config.max_iterations {
            warn!("make_readable: gave up after {steps} steps at {color} ({ratio:.3} < {required})");
            return Err(Error::NonConvergence {
                steps,
                last: color.to_string(),
            });
        }

        let raw = direction.apply(color, config.step);
        steps += 1;

        color = match (config.gamut, raw.to_rgb()) {
            (_, Some(rgb)) => rgb,
            (Gamut::Clamp, None) => raw.clamped(),
            (Gamut::Unclamped, None) => {
                warn!("make_readable: step {steps} left the sRGB gamut at {}", raw.to_hex());
                return Err(Error::NonConvergence {
                    steps,
                    last: raw.to_hex(),
                });
            }
        };
        ratio = contrast_ratio(color, foreground);
        trace!("make_readable: step {steps} -> {color} ({ratio:.3})");
    }

    if steps > 0 {
        debug!("make_readable: {background} -> {color} in {steps} steps ({ratio:.3})");
    }

    Ok(Adjustment {
        color,
        steps,
        direction,
        ratio,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::contrast::is_readable;
    use proptest::prelude::*;

    fn any_rgb() -> impl Strategy<Value = Rgb> {
        any::<(u8, u8, u8)>().prop_map(Rgb::from)
    }

    fn any_target() -> impl Strategy<Value = (Level, TextSize)> {
        (
            prop_oneof![Just(Level::AA), Just(Level::AAA)],
            prop_oneof![Just(TextSize::Small), Just(TextSize::Large)],
        )
    }

    proptest! {
        #[test]
        fn success_is_readable(bg in any_rgb(), fg in any_rgb(), (level, size) in any_target()) {
            if let Ok(adj) = make_readable(bg, fg, level, size, &AdjustConfig::default()) {
                prop_assert!(is_readable(adj.color, fg, level, size));
                prop_assert!(adj.steps <= DEFAULT_MAX_ITERATIONS);
            }
        }

        #[test]
        fn readable_input_is_returned_as_is(bg in any_rgb(), fg in any_rgb(), (level, size) in any_target()) {
            if is_readable(bg, fg, level, size) {
                let adj = make_readable(bg, fg, level, size, &AdjustConfig::default()).unwrap();
                prop_assert_eq!(adj.color, bg);
                prop_assert_eq!(adj.steps, 0);
            }
        }

        #[test]
        fn only_fails_with_non_convergence(bg in any_rgb(), fg in any_rgb(), (level, size) in any_target()) {
            if let Err(err) = make_readable(bg, fg, level, size, &AdjustConfig::default()) {
                let is_non_convergence = matches!(err, Error::NonConvergence { .. });
                prop_assert!(is_non_convergence, "{:?}", err);
            }
        }
    }
}
