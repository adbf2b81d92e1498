//! Punctuation disambiguation
//!
//! The second pipeline stage resolves context-sensitive punctuation: a period
//! may end a sentence, mark an abbreviation or sit inside a decimal number; a
//! hyphen may join a compound word or separate a numeric range; an apostrophe
//! may be a contraction or a quotation mark. Resolution uses a bounded window
//! only (the immediately preceding classified lexeme and the next one or two
//! raw lexemes), so the pass stays linear with no backtracking, even on
//! adversarial input.
//!
//! The stage never fails: every punctuation lexeme receives exactly one
//! [`PunctuationRole`], with `Generic` and `SentenceEnd` as the safe defaults
//! when no rule matches. Defaulting periods to `SentenceEnd` is deliberate:
//! a spurious sentence break is recoverable downstream, while silently
//! merging two unrelated sentences is not.
//!
//! Resolution order for a period, when several rules could apply:
//!
//! 1. digit neighbors on both sides → decimal point
//! 2. preceding letter run in the abbreviation set → abbreviation mark
//! 3. preceding letter run, then whitespace and a lowercase letter run →
//!    abbreviation mark ("Mr. smith" reads as a continuation, not a break)
//! 4. otherwise → sentence end

use serde::{Deserialize, Serialize};

use crate::chars::{self, Category};
use crate::options::LexOptions;
use crate::scanner::RawLexeme;

/// The resolved semantic function of a punctuation mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PunctuationRole {
    /// Ends a sentence ('.', '!', '?', '…')
    SentenceEnd,
    /// Period closing an abbreviation ("Mr.", "etc.")
    AbbreviationMark,
    /// Period between two digit runs ("3.50")
    DecimalPoint,
    /// Comma between a digit run and a three-digit group ("1,000")
    ThousandsSeparator,
    /// Hyphen joining two letter runs ("well-known")
    HyphenJoiner,
    /// Hyphen separating two digit runs ("9-5")
    HyphenRange,
    /// Opening quotation mark
    QuoteOpen,
    /// Closing quotation mark
    QuoteClose,
    /// Apostrophe inside a contraction ("don't")
    Contraction,
    /// No special function resolved
    Generic,
}

/// A raw lexeme plus its resolved punctuation role.
///
/// `role` is `Some` exactly when the lexeme's category is
/// [`Category::Punctuation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLexeme {
    /// The underlying raw lexeme
    pub lexeme: RawLexeme,
    /// The resolved role, for punctuation lexemes only
    pub role: Option<PunctuationRole>,
}

/// Resolve a role for every punctuation lexeme in the stream.
///
/// Left to right, with one classified lexeme of lookbehind and up to two raw
/// lexemes of lookahead. Total: every input lexeme appears in the output in
/// order, and classification of the same context is deterministic.
pub fn disambiguate(lexemes: &[RawLexeme], options: &LexOptions) -> Vec<ClassifiedLexeme> {
    let mut classified: Vec<ClassifiedLexeme> = Vec::with_capacity(lexemes.len());

    for (i, lexeme) in lexemes.iter().enumerate() {
        let role = if lexeme.category == Category::Punctuation {
            let prev = classified.last().map(|c| &c.lexeme);
            Some(resolve(
                lexeme,
                prev,
                lexemes.get(i + 1),
                lexemes.get(i + 2),
                options,
            ))
        } else {
            None
        };
        classified.push(ClassifiedLexeme {
            lexeme: lexeme.clone(),
            role,
        });
    }

    classified
}

fn resolve(
    lexeme: &RawLexeme,
    prev: Option<&RawLexeme>,
    next: Option<&RawLexeme>,
    next2: Option<&RawLexeme>,
    options: &LexOptions,
) -> PunctuationRole {
    let Some(mark) = lexeme.text.chars().next() else {
        return PunctuationRole::Generic;
    };

    match mark {
        '.' => resolve_period(prev, next, next2, options),
        ',' => resolve_comma(prev, next),
        '"' => resolve_quote(prev, next),
        '\u{201C}' => PunctuationRole::QuoteOpen,
        '\u{201D}' => PunctuationRole::QuoteClose,
        c if chars::is_hyphen(c) => resolve_hyphen(prev, next),
        c if chars::is_apostrophe(c) => resolve_apostrophe(prev, next),
        c if chars::is_sentence_terminal(c) => PunctuationRole::SentenceEnd,
        _ => PunctuationRole::Generic,
    }
}

fn resolve_period(
    prev: Option<&RawLexeme>,
    next: Option<&RawLexeme>,
    next2: Option<&RawLexeme>,
    options: &LexOptions,
) -> PunctuationRole {
    // Digit neighbors win over everything else.
    if category(prev) == Some(Category::Digit) && category(next) == Some(Category::Digit) {
        return PunctuationRole::DecimalPoint;
    }

    if let Some(prev) = prev {
        if prev.category == Category::Letter && options.is_abbreviation(&prev.text) {
            return PunctuationRole::AbbreviationMark;
        }
    }

    // Unknown stem followed by a lowercase continuation reads as an
    // abbreviation: sentences almost never begin with a lowercase word.
    if category(prev) == Some(Category::Letter) && category(next) == Some(Category::Whitespace) {
        if let Some(next2) = next2 {
            if next2.category == Category::Letter && chars::starts_lowercase(&next2.text) {
                return PunctuationRole::AbbreviationMark;
            }
        }
    }

    PunctuationRole::SentenceEnd
}

fn resolve_comma(prev: Option<&RawLexeme>, next: Option<&RawLexeme>) -> PunctuationRole {
    let grouped = category(prev) == Some(Category::Digit)
        && next.is_some_and(|n| n.category == Category::Digit && n.text.len() == 3);
    if grouped {
        PunctuationRole::ThousandsSeparator
    } else {
        PunctuationRole::Generic
    }
}

fn resolve_hyphen(prev: Option<&RawLexeme>, next: Option<&RawLexeme>) -> PunctuationRole {
    match (category(prev), category(next)) {
        (Some(Category::Letter), Some(Category::Letter)) => PunctuationRole::HyphenJoiner,
        (Some(Category::Digit), Some(Category::Digit)) => PunctuationRole::HyphenRange,
        _ => PunctuationRole::Generic,
    }
}

fn resolve_apostrophe(prev: Option<&RawLexeme>, next: Option<&RawLexeme>) -> PunctuationRole {
    if category(prev) == Some(Category::Letter) && category(next) == Some(Category::Letter) {
        return PunctuationRole::Contraction;
    }
    resolve_quote(prev, next)
}

/// Open/close by adjacency: a quote after a boundary opens, a quote before a
/// boundary closes, anything else (or a lone quote) is generic.
fn resolve_quote(prev: Option<&RawLexeme>, next: Option<&RawLexeme>) -> PunctuationRole {
    let boundary_before = prev.map_or(true, |l| l.category == Category::Whitespace);
    let boundary_after = next.map_or(true, |l| l.category == Category::Whitespace);
    match (boundary_before, boundary_after) {
        (true, false) => PunctuationRole::QuoteOpen,
        (false, true) => PunctuationRole::QuoteClose,
        _ => PunctuationRole::Generic,
    }
}

fn category(lexeme: Option<&RawLexeme>) -> Option<Category> {
    lexeme.map(|l| l.category)
}
