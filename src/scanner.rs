//! Raw lexeme scanning
//!
//! This module performs the first pipeline stage: a single left-to-right pass
//! that groups characters into raw lexemes with byte spans. The per-character
//! categorization is a logos-derived DFA; letter runs, digit runs and
//! whitespace runs become one lexeme each, while punctuation and symbol
//! characters always become single-character lexemes. Multi-character
//! punctuation sequences like "..." are deliberately left unmerged here; the
//! token assembler merges them once roles are known.
//!
//! Input the DFA rejects (control characters, stray combining marks, unusual
//! numerals) is classified per character through [`crate::chars::classify`]
//! and collected into [`Category::Other`] lexemes, so every byte of the input
//! belongs to exactly one lexeme and the token stream can losslessly
//! reconstruct the source.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::chars::{classify, Category};

/// The scanner's DFA. One variant per coarse category; the `+` patterns do
/// the run-merging for letters, digits and whitespace.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"\p{L}+")]
    Letter,

    #[regex(r"[0-9]+")]
    Digit,

    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"\p{P}")]
    Punctuation,

    #[regex(r"\p{S}")]
    Symbol,
}

/// A maximal run of characters sharing one coarse category, with its byte
/// span in the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLexeme {
    /// The coarse category of every character in this lexeme
    pub category: Category,
    /// The verbatim source substring
    pub text: String,
    /// Byte range in the source text
    pub span: Range<usize>,
}

/// Scan source text into raw lexemes.
///
/// Single pass, total: empty input yields an empty vec, and unmatchable
/// characters land in `Other` lexemes instead of being dropped.
pub fn scan(source: &str) -> Vec<RawLexeme> {
    let mut lexer = RawToken::lexer(source);
    let mut lexemes: Vec<RawLexeme> = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => push_lexeme(&mut lexemes, category_of(token), lexer.slice(), span),
            // The DFA rejected this slice; classify character by character so
            // the content still lands in a lexeme.
            Err(()) => {
                for (offset, c) in lexer.slice().char_indices() {
                    let start = span.start + offset;
                    let end = start + c.len_utf8();
                    push_lexeme(&mut lexemes, classify(c), &source[start..end], start..end);
                }
            }
        }
    }

    lexemes
}

fn category_of(token: RawToken) -> Category {
    match token {
        RawToken::Letter => Category::Letter,
        RawToken::Digit => Category::Digit,
        RawToken::Whitespace => Category::Whitespace,
        RawToken::Punctuation => Category::Punctuation,
        RawToken::Symbol => Category::Symbol,
    }
}

/// Append a lexeme, run-merging with the previous one when the category
/// matches and the spans are contiguous. Punctuation and symbols never merge:
/// they stay single-character so the disambiguator sees each mark on its own.
fn push_lexeme(lexemes: &mut Vec<RawLexeme>, category: Category, text: &str, span: Range<usize>) {
    if !matches!(category, Category::Punctuation | Category::Symbol) {
        if let Some(last) = lexemes.last_mut() {
            if last.category == category && last.span.end == span.start {
                last.text.push_str(text);
                last.span.end = span.end;
                return;
            }
        }
    }
    lexemes.push(RawLexeme {
        category,
        text: text.to_owned(),
        span,
    });
}
