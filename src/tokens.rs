//! Token and sentence types
//!
//! The externally visible output of the lexer: typed tokens carrying both the
//! verbatim surface text and a normalized form, and sentences grouping
//! contiguous token index ranges. Everything here is plain data, serializable
//! with serde so a downstream TTS pipeline can persist or ship token streams
//! without re-lexing.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::disambiguate::PunctuationRole;

/// The semantic kind of a token.
///
/// The baseline lexer produces `Word`, `Number`, `Punctuation`, `Whitespace`,
/// `Symbol`, `Other` and the web-entity kinds `Url`, `Hashtag` and
/// `Mention`. The remaining variants are reserved for planned
/// recognition rules (dates, currency, ordinals and friends); each such rule
/// is additive: a new resolution rule in the disambiguator/assembler pair
/// and a new variant here, with no change to the scanner. Until the compound
/// rule lands, hyphenated compounds collapse to `Word`.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// A word, including contractions and hyphenated compounds
    Word,
    /// An integer, decimal, grouped number or numeric range
    Number,
    /// A punctuation mark or run of identical marks
    Punctuation,
    /// A run of whitespace, preserved for lossless reconstruction
    Whitespace,
    /// A math, currency or other symbol character
    Symbol,
    /// Content the scanner could not classify (control characters etc.)
    Other,
    /// An http:// or https:// URL ("https://example.com/page")
    Url,
    /// A #-prefixed hashtag ("#rust")
    Hashtag,
    /// An @-prefixed username mention ("@echelon")
    Mention,
    /// Reserved: abbreviation with its trailing mark ("Mr.")
    Abbreviation,
    /// Reserved: letter-by-letter acronym ("NASA")
    Acronym,
    /// Reserved: calendar date
    Date,
    /// Reserved: clock time
    Time,
    /// Reserved: duration ("2h30m")
    Duration,
    /// Reserved: currency amount ("$3.50")
    Currency,
    /// Reserved: ordinal number ("3rd")
    Ordinal,
    /// Reserved: ratio ("16:9")
    Ratio,
    /// Reserved: emoji and pictographs
    Emoji,
    /// Reserved: hyphenated compound kept distinct from plain words
    HyphenatedCompound,
}

/// A semantic token: the unit handed to downstream TTS consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The semantic kind
    pub kind: TokenKind,
    /// Verbatim source text; concatenating surfaces in order reconstructs the
    /// input exactly
    pub surface: String,
    /// Normalized form: lowercased words, separator-stripped numbers, or the
    /// dictionary lookup result when a callback supplied one
    pub normalized: String,
    /// Byte range in the source text
    pub span: Range<usize>,
    /// The resolved punctuation role, for punctuation tokens
    pub role: Option<PunctuationRole>,
}

impl Token {
    /// True if this token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// True if this token was resolved as a sentence terminal.
    pub fn is_sentence_terminal(&self) -> bool {
        self.role == Some(PunctuationRole::SentenceEnd)
    }
}

/// A maximal run of tokens ending at a sentence terminal, or the unterminated
/// trailing remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Index range into [`LexResult::tokens`]
    pub tokens: Range<usize>,
    /// Index of the terminal token, or `None` for an unterminated remainder
    pub terminal: Option<usize>,
}

/// The complete result of one lexing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexResult {
    /// All tokens, in source order
    pub tokens: Vec<Token>,
    /// Sentence groupings over the token stream
    pub sentences: Vec<Sentence>,
}

impl LexResult {
    /// The tokens belonging to a sentence.
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.tokens.clone()]
    }

    /// Reconstruct the original input from token surfaces.
    pub fn surface(&self) -> String {
        self.tokens.iter().map(|t| t.surface.as_str()).collect()
    }
}
