//! Error types for sheet-cards-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a sheet payload.
///
/// Short or incomplete rows are never errors; they are dropped by the parser.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not valid UTF-8 text (invalid byte at offset {offset})")]
    NotText { offset: usize },
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::NotText {
            offset: err.valid_up_to(),
        }
    }
}
