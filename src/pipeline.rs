//! Lexer facade
//!
//! The single entry point that drives the four stages in order: scan →
//! disambiguate → assemble → segment. One call is one pass over the input
//! with no suspension points, no I/O and no state shared between calls, so a
//! [`SentenceLexer`] can be used from any number of threads at once.

use crate::assemble::assemble;
use crate::disambiguate::disambiguate;
use crate::error::LexError;
use crate::options::LexOptions;
use crate::scanner::scan;
use crate::segment::segment;
use crate::tokens::LexResult;

/// Lex text with default options.
///
/// Total and deterministic: any string of valid characters produces a result,
/// and the same input always produces a structurally identical one.
pub fn lex(source: &str) -> LexResult {
    SentenceLexer::new().lex(source)
}

/// The sentence lexer: configuration plus the pipeline driver.
#[derive(Default)]
pub struct SentenceLexer {
    options: LexOptions,
}

impl SentenceLexer {
    /// A lexer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A lexer with the given options.
    pub fn with_options(options: LexOptions) -> Self {
        Self { options }
    }

    /// Lex source text into tokens and sentences.
    pub fn lex(&self, source: &str) -> LexResult {
        let raw = scan(source);
        let classified = disambiguate(&raw, &self.options);
        let tokens = assemble(&classified, &self.options);
        let sentences = segment(&tokens);
        LexResult { tokens, sentences }
    }

    /// Lex raw bytes, refusing invalid UTF-8.
    ///
    /// This is the one fatal path: the lexer does not guess at byte-level
    /// recovery for broken encodings.
    pub fn lex_bytes(&self, bytes: &[u8]) -> Result<LexResult, LexError> {
        let source = std::str::from_utf8(bytes)?;
        Ok(self.lex(source))
    }
}
