//! Error types for the crate's fallible edges.
//!
//! Runtime scroll/gesture handling never fails; defensive guards hide the
//! scrollbar instead. The only fallible operations are configuration
//! validation and theme color parsing.

use thiserror::Error;

/// Failure to parse a hex color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected #RRGGBB or #AARRGGBB, got {0} digits")]
    BadLength(usize),
    #[error("invalid hex digit in color literal {0:?}")]
    BadDigit(String),
    #[error("color literal must start with '#'")]
    MissingHash,
}

/// Invalid scroller configuration, reported at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("thumb width range is invalid: min {min} must be in 1..={max}")]
    ThumbWidthRange { min: i32, max: i32 },
    #[error("thumb height must be positive, got {0}")]
    NonPositiveThumbHeight(i32),
    #[error("hide delay must be positive, got {0} ms")]
    ZeroHideDelay(u32),
}
