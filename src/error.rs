//! Error types for chat log parsing.
//!
//! The core parser only ever fails with [`ParseError`]. Layers above it (file
//! reading, directory indexing, the CLI) use `anyhow` and wrap these errors with
//! context, so callers can still recover the typed error via
//! [`anyhow::Error::downcast_ref`].

use thiserror::Error;

/// Errors returned by the chat log parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer does not follow the chat log layout.
    #[error("invalid file format: {0}")]
    InvalidFormat(FormatViolation),

    /// A caller-supplied option was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// The structural expectation that an input buffer violated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// The magic number is absent from the buffer.
    #[error("magic number not found")]
    MissingMagicNumber,

    /// The header boundary pattern never occurs.
    #[error("header boundary not found")]
    MissingHeaderBoundary,

    /// The closing header boundary is missing or overlaps the opening one.
    #[error("header is truncated or empty")]
    TruncatedHeader,
}

impl From<FormatViolation> for ParseError {
    fn from(violation: FormatViolation) -> Self {
        Self::InvalidFormat(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = ParseError::InvalidFormat(FormatViolation::MissingMagicNumber);
        assert_eq!(err.to_string(), "invalid file format: magic number not found");

        let err = ParseError::InvalidFormat(FormatViolation::TruncatedHeader);
        assert_eq!(err.to_string(), "invalid file format: header is truncated or empty");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = ParseError::InvalidArgument("offset must be an integer, got 1.5".to_string());
        assert_eq!(err.to_string(), "invalid argument: offset must be an integer, got 1.5");
    }

    #[test]
    fn test_from_format_violation() {
        let err: ParseError = FormatViolation::MissingHeaderBoundary.into();
        assert!(matches!(err, ParseError::InvalidFormat(FormatViolation::MissingHeaderBoundary)));
    }

    #[test]
    fn test_parse_error_survives_anyhow_context() {
        use anyhow::Context;

        let result: Result<(), ParseError> = Err(FormatViolation::MissingMagicNumber.into());
        let err = result.context("Failed to parse chat log: local.txt").unwrap_err();

        assert!(err.to_string().contains("Failed to parse chat log"));
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::InvalidFormat(FormatViolation::MissingMagicNumber))
        );
    }
}
