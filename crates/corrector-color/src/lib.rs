// SPDX-License-Identifier: MIT
//
// corrector-color — color primitives for color-corrector.
//
// Everything here operates on 8-bit sRGB triplets written as `#rrggbb`.
// The crate is split along the pipeline a color travels through:
//
//   hex string ──► Rgb ──► relative luminance   (measurement)
//                   │
//                   └────► Hsl ──► RawRgb ──► hex string   (adjustment)
//
// Measurement follows the WCAG 2.x definition of relative luminance.
// Adjustment goes through HSL so that lightness can be nudged without
// touching hue or saturation. No step clamps: values outside the sRGB
// gamut survive as `RawRgb` until the caller decides what to do with them.

pub mod error;
pub mod hex;
pub mod hsl;
pub mod luminance;
pub mod rgb;

pub use error::{HexErrorKind, ParseHexError};
pub use hsl::{Hsl, RawRgb};
pub use rgb::Rgb;
