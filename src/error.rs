//! Error types for reading, building, and writing rosters.

use std::io;

use thiserror::Error;

/// A structural violation of the line format.
///
/// Line numbers are 1-based and count every line pulled from the source.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: projects header `<projects>` was expected, found {found:?}")]
    MissingHeader { line: usize, found: String },

    #[error("line {line}: project header is incorrect: {found:?}")]
    ProjectHeader { line: usize, found: String },

    #[error("line {line}: member line is incorrect: {found:?}")]
    MemberLine { line: usize, found: String },

    #[error("unexpected end of input after line {line}, expected {expected}")]
    UnexpectedEnd { line: usize, expected: &'static str },
}

impl FormatError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            FormatError::MissingHeader { line, .. }
            | FormatError::ProjectHeader { line, .. }
            | FormatError::MemberLine { line, .. }
            | FormatError::UnexpectedEnd { line, .. } => *line,
        }
    }
}

/// A constructor was handed a list holding an absent entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument `{argument}`: {message}")]
pub struct InvalidArgument {
    argument: &'static str,
    message: &'static str,
}

impl InvalidArgument {
    pub fn new(argument: &'static str, message: &'static str) -> Self {
        Self { argument, message }
    }

    pub fn argument(&self) -> &'static str {
        self.argument
    }
}

/// Any failure surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_line() {
        let err = FormatError::MemberLine {
            line: 4,
            found: "bad".to_string(),
        };
        assert_eq!(err.line(), 4);
        assert_eq!(err.to_string(), "line 4: member line is incorrect: \"bad\"");
    }

    #[test]
    fn test_unexpected_end_message() {
        let err = FormatError::UnexpectedEnd {
            line: 1,
            expected: "`</projects>`",
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input after line 1, expected `</projects>`"
        );
    }

    #[test]
    fn test_error_is_transparent_over_format() {
        let err: Error = FormatError::ProjectHeader {
            line: 2,
            found: "x".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "line 2: project header is incorrect: \"x\"");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = InvalidArgument::new("members", "must not contain absent entries");
        assert_eq!(err.argument(), "members");
        assert_eq!(
            err.to_string(),
            "invalid argument `members`: must not contain absent entries"
        );
    }
}
