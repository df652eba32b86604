//! Error types.

use core::fmt::{self, Debug, Display};

/// Reason a width configuration was rejected by
/// [`Config::new`](crate::config::Config::new).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Words must hold at least one bit.
    ZeroWordBits,
    /// Words wider than half of the native integer would overflow native
    /// arithmetic when doubled or multiplied.
    WordTooWide,
    /// Total width is not a whole number of words.
    NotWordMultiple,
    /// Total width is below 64 bits.
    TooNarrow,
}

impl ConfigError {
    /// Short description of the violated rule.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::ZeroWordBits => "word width must be at least one bit",
            ConfigError::WordTooWide => {
                "word width exceeds half of the native integer width"
            }
            ConfigError::NotWordMultiple => {
                "total width is not a multiple of the word width"
            }
            ConfigError::TooNarrow => "total width must be at least 64 bits",
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::error::Error for ConfigError {}

/// Kind of failure when parsing a [`BigInt`](crate::BigInt) from a string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// No digits after the optional sign.
    Empty,
    /// A character is not a digit of the requested base.
    InvalidDigit,
    /// The base is outside `2..=36`.
    InvalidRadix,
}

/// Error returned when parsing a [`BigInt`](crate::BigInt) fails.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseIntError {
    kind: ParseErrorKind,
}

impl ParseIntError {
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the detailed cause of the failure.
    #[must_use]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl Debug for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseIntError").field("kind", &self.kind).finish()
    }
}

impl Display for ParseIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            ParseErrorKind::Empty => "cannot parse integer from empty string",
            ParseErrorKind::InvalidDigit => "invalid digit found in string",
            ParseErrorKind::InvalidRadix => "radix must lie in 2..=36",
        })
    }
}

impl core::error::Error for ParseIntError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violated_rule() {
        assert_eq!(
            ConfigError::TooNarrow.to_string(),
            "total width must be at least 64 bits"
        );
        let err = ParseIntError::new(ParseErrorKind::InvalidDigit);
        assert_eq!(err.to_string(), "invalid digit found in string");
        assert_eq!(err.kind(), &ParseErrorKind::InvalidDigit);
    }
}
