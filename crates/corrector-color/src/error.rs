// SPDX-License-Identifier: MIT

//! Hex parse errors.

use thiserror::Error;

/// A string that is not a `#rrggbb` color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color {input:?}: {kind}")]
pub struct ParseHexError {
    /// The input exactly as the caller passed it.
    pub input: String,
    /// What was wrong with it.
    pub kind: HexErrorKind,
}

/// Why a hex color failed to parse.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexErrorKind {
    /// Not exactly six digits once the optional `#` is stripped.
    #[error("expected 6 hex digits, found {0} characters")]
    Length(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("{found:?} at position {position} is not a hex digit")]
    Digit { position: usize, found: char },
}

impl ParseHexError {
    pub(crate) fn new(input: &str, kind: HexErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}
