//! Lexer errors
//!
//! Ordinary malformed text is never an error: unknown symbols, unterminated
//! quotes and stray punctuation all lex into `Generic`/`Other` tokens. The
//! only fatal category is a contract violation by the caller: bytes that are
//! not valid UTF-8 are refused rather than guessed at.

use std::fmt;
use std::str::Utf8Error;

/// Errors surfaced by the lexer facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input bytes are not valid UTF-8
    InvalidEncoding(Utf8Error),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidEncoding(err) => write!(f, "input is not valid UTF-8: {}", err),
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexError::InvalidEncoding(err) => Some(err),
        }
    }
}

impl From<Utf8Error> for LexError {
    fn from(err: Utf8Error) -> Self {
        LexError::InvalidEncoding(err)
    }
}
