// SPDX-License-Identifier: MIT

//! `#rrggbb` hex codec.
//!
//! Parsing is strict: one optional leading `#`, then exactly six hex digits
//! (either case). Formatting is not: [`format_hex`] writes whatever channel
//! values it is given, so an out-of-gamut triplet produces a string that
//! will not parse back. That is how an unclamped adjustment shows up.

use crate::error::{HexErrorKind, ParseHexError};
use crate::rgb::Rgb;

/// Strip a single leading `#`, if present.
#[inline]
#[must_use]
pub fn strip_hash(s: &str) -> &str {
    s.strip_prefix('#').unwrap_or(s)
}

/// Parse `#rrggbb` or `rrggbb` into an [`Rgb`] triplet.
///
/// # Errors
///
/// Returns [`ParseHexError`] if the input is not exactly six hex digits
/// after stripping the optional `#`.
pub fn parse_hex(s: &str) -> Result<Rgb, ParseHexError> {
    let digits = strip_hash(s);

    let len = digits.chars().count();
    if len != 6 {
        return Err(ParseHexError::new(s, HexErrorKind::Length(len)));
    }

    let mut nibbles = [0u8; 6];
    for (position, (slot, found)) in nibbles.iter_mut().zip(digits.chars()).enumerate() {
        *slot = parse_hex_digit(found)
            .ok_or_else(|| ParseHexError::new(s, HexErrorKind::Digit { position, found }))?;
    }

    Ok(Rgb::new(
        nibbles[0] << 4 | nibbles[1],
        nibbles[2] << 4 | nibbles[3],
        nibbles[4] << 4 | nibbles[5],
    ))
}

/// Format raw channel values as `#rrggbb`.
///
/// Each channel is written as zero-padded lowercase hex with no clamping.
/// Values above 255 widen to three digits; negative values are written as
/// their two's complement. Neither parses back with [`parse_hex`].
#[must_use]
pub fn format_hex(r: i32, g: i32, b: i32) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[inline]
fn parse_hex_digit(c: char) -> Option<u8> {
    // to_digit(16) is at most 15
    c.to_digit(16).and_then(|d| u8::try_from(d).ok())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
