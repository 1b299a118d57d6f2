//! Errors raised while reading IFM sources.
//!
//! Lexing text that is already in memory cannot fail; only pulling bytes from
//! a reader can.

use std::io;

use thiserror::Error;

/// Errors produced by the [`ChunkedLexer`](crate::ChunkedLexer)
#[derive(Debug, Error)]
pub enum LexerError {
    /// The underlying reader failed
    #[error("failed to read IFM source: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8
    #[error("IFM source is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        offset: usize,
    },
}

/// Result type for reading and lexing IFM sources
pub type LexerResult<T> = Result<T, LexerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LexerError::InvalidUtf8 { offset: 12 }.to_string(),
            "IFM source is not valid UTF-8 at byte 12"
        );

        let err = LexerError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));
        assert_eq!(err.to_string(), "failed to read IFM source: truncated");
    }
}
