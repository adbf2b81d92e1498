//! # sentlex
//!
//! A sentence lexer for speech synthesis pipelines. sentlex converts raw
//! English text into an ordered stream of typed tokens (words, numbers,
//! punctuation, whitespace) grouped into sentences, with enough structure for
//! a pronunciation or prosody module to decide how each token should be
//! spoken.
//!
//! The pipeline is a single left-to-right pass through four stages:
//!
//! 1. [`scanner`]: group characters into raw lexemes with byte spans
//! 2. [`disambiguate`]: resolve overloaded punctuation (a period may end a
//!    sentence, mark an abbreviation, or be a decimal point)
//! 3. [`assemble`]: merge lexemes into semantic tokens with normalized forms
//! 4. [`segment`]: group tokens into sentences at resolved terminals
//!
//! The whole pipeline is total: any string of valid characters produces a
//! token stream, and concatenating the token surfaces reproduces the input
//! exactly.
//!
//! ```rust
//! use sentlex::{lex, TokenKind};
//!
//! let result = lex("Dr. Smith went home.");
//! assert_eq!(result.sentences.len(), 1);
//! assert_eq!(result.tokens[0].kind, TokenKind::Word);
//! assert_eq!(result.tokens[0].surface, "Dr");
//! assert_eq!(result.surface(), "Dr. Smith went home.");
//! ```

pub mod assemble;
pub mod chars;
pub mod disambiguate;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod scanner;
pub mod segment;
pub mod tokens;

pub use chars::Category;
pub use disambiguate::{ClassifiedLexeme, PunctuationRole};
pub use error::LexError;
pub use options::{LexOptions, LookupEntry};
pub use pipeline::{lex, SentenceLexer};
pub use scanner::RawLexeme;
pub use tokens::{LexResult, Sentence, Token, TokenKind};
