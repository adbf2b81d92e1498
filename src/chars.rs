//! Character-level classification
//!
//! Coarse per-character categories plus the small set of character predicates
//! the disambiguator needs. Everything here is a pure, total function over a
//! single code point: every character maps to exactly one [`Category`], with
//! control and unrecognized characters landing in [`Category::Other`] rather
//! than failing.

use serde::{Deserialize, Serialize};

/// The coarse category of a single character or lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Alphabetic characters
    Letter,
    /// ASCII decimal digits
    Digit,
    /// Spaces, tabs, newlines and other whitespace
    Whitespace,
    /// Punctuation marks (always single-character lexemes)
    Punctuation,
    /// Math, currency and other symbols (always single-character lexemes)
    Symbol,
    /// Control characters and anything else
    Other,
}

/// Classify a single character into its coarse category.
///
/// Total over all of `char`; unrecognized code points map to
/// [`Category::Other`]. The scanner uses this as the fallback table for input
/// its DFA rejects, so the categories here only need to agree with the DFA on
/// the characters the DFA accepts.
pub fn classify(c: char) -> Category {
    if c.is_ascii_digit() {
        Category::Digit
    } else if c.is_alphabetic() {
        Category::Letter
    } else if c.is_whitespace() {
        Category::Whitespace
    } else if is_punctuation(c) {
        Category::Punctuation
    } else if is_symbol(c) {
        Category::Symbol
    } else {
        Category::Other
    }
}

/// ASCII punctuation plus the General Punctuation block (dashes, curly
/// quotes, ellipsis). Coarse by design: the disambiguator only ever inspects
/// marks the scanner accepted.
fn is_punctuation(c: char) -> bool {
    matches!(c,
        '!' | '"' | '#' | '%' | '&' | '\'' | '(' | ')' | '*' | ',' | '-' | '.' | '/'
        | ':' | ';' | '?' | '@' | '[' | '\\' | ']' | '_' | '{' | '}'
        | '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}')
}

/// ASCII symbols plus common currency signs.
fn is_symbol(c: char) -> bool {
    matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~'
        | '\u{00A2}'..='\u{00A5}' | '\u{20A0}'..='\u{20BF}')
}

/// Marks that end a sentence when resolved as terminals.
pub fn is_sentence_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

/// Hyphen characters that can join compounds or separate ranges.
pub fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Apostrophe characters (straight and typographic).
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

/// True if the text begins with a lowercase letter.
pub fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}
