//! Error type shared by everything that evaluates or corrects contrast.

use corrector_color::ParseHexError;
use thiserror::Error;

/// Errors from contrast evaluation and readability correction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A color string was not `#rrggbb`.
    #[error(transparent)]
    InvalidFormat(#[from] ParseHexError),

    /// The background never reached the required ratio.
    ///
    /// Either the iteration cap was hit, or a step pushed the color out of
    /// the sRGB gamut. `last` is the final candidate as unclamped hex.
    #[error("no readable color found after {steps} steps (last candidate {last})")]
    NonConvergence { steps: usize, last: String },

    /// Not one of `AA`, `AAA`.
    #[error("unknown contrast level {0:?}, expected \"AA\" or \"AAA\"")]
    InvalidLevel(String),

    /// Not one of `small`, `large`.
    #[error("unknown text size {0:?}, expected \"small\" or \"large\"")]
    InvalidSize(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
