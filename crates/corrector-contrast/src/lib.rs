//! # corrector-contrast — WCAG readability evaluation and correction
//!
//! Measures how readable a foreground color is against a background and,
//! when it is not readable enough, walks the background's lightness until
//! it is.
//!
//! # Architecture
//!
//! ```text
//! background + foreground (Rgb)
//!     │
//!     ▼
//! contrast.rs: WCAG contrast ratio (1.0 ..= 21.0)
//!     │
//!     ▼
//! level.rs:    required ratio for (Level, TextSize)
//!     │
//!     ▼
//! adjust.rs:   darken/lighten the background in 0.01 steps until it passes
//! ```
//!
//! Direction is picked from the foreground's luma: a light foreground
//! darkens the background, a dark one lightens it. The loop is bounded by
//! [`AdjustConfig::max_iterations`] and fails with
//! [`Error::NonConvergence`] instead of spinning forever.

// Contrast math reads better with the conventional short names.
#![allow(clippy::similar_names)]

pub mod adjust;
pub mod contrast;
pub mod error;
pub mod level;

pub use adjust::{AdjustConfig, Adjustment, Direction, Gamut, make_readable};
pub use contrast::{contrast_ratio, is_readable};
pub use error::{Error, Result};
pub use level::{Level, TextSize, meets, required_ratio};
