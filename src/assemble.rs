//! Token assembly
//!
//! The third pipeline stage merges classified lexemes into semantic tokens.
//! A number token swallows its decimal point, thousands separators and range
//! hyphen; a word token swallows its contraction apostrophes and joining
//! hyphens; runs of repeated punctuation collapse into a single mark. Every
//! lexeme ends up in exactly one token and surfaces are carried verbatim, so
//! the output still reconstructs the input byte for byte.
//!
//! Normalization happens here too: words are lowercased (or replaced by the
//! dictionary lookup result when a callback is configured) and numbers have
//! their grouping separators stripped. Lookup is best-effort; a miss just
//! falls back to lowercasing.
//!
//! Web entities are kept whole for speech: an "http(s)://" scheme starts a
//! URL token that runs to the next whitespace, and a "#" or "@" at a word
//! boundary glued to a word run becomes a hashtag or username mention.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars::Category;
use crate::disambiguate::{ClassifiedLexeme, PunctuationRole};
use crate::options::LexOptions;
use crate::scanner::RawLexeme;
use crate::tokens::{Token, TokenKind};

/// Shape of a well-formed comma-grouped number: 1-3 leading digits and
/// exactly three digits per group ("1,234,567", optionally with a decimal
/// part). A comma chain that fails this check is left unmerged.
static GROUPED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,3}(,[0-9]{3})+(\.[0-9]+)?$").unwrap());

/// Merge classified lexemes into semantic tokens.
///
/// Single forward pass. Every rule peeks a bounded distance ahead except the
/// URL rule, which runs to the next whitespace.
pub fn assemble(lexemes: &[ClassifiedLexeme], options: &LexOptions) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < lexemes.len() {
        i = match lexemes[i].lexeme.category {
            Category::Digit => assemble_number(lexemes, i, &mut tokens),
            Category::Letter => assemble_word(lexemes, i, options, &mut tokens),
            Category::Punctuation => assemble_punctuation(lexemes, i, &mut tokens),
            Category::Whitespace => passthrough(lexemes, i, TokenKind::Whitespace, &mut tokens),
            Category::Symbol => passthrough(lexemes, i, TokenKind::Symbol, &mut tokens),
            Category::Other => passthrough(lexemes, i, TokenKind::Other, &mut tokens),
        };
    }

    tokens
}

/// Emit one lexeme unchanged as a token of the given kind.
fn passthrough(
    lexemes: &[ClassifiedLexeme],
    i: usize,
    kind: TokenKind,
    tokens: &mut Vec<Token>,
) -> usize {
    let lexeme = &lexemes[i].lexeme;
    tokens.push(Token {
        kind,
        surface: lexeme.text.clone(),
        normalized: lexeme.text.clone(),
        span: lexeme.span.clone(),
        role: lexemes[i].role,
    });
    i + 1
}

/// Assemble a number starting at a digit run: optional comma groups, an
/// optional decimal part, and an optional digit range ("9-5", "3.5-4.2").
/// Returns the index after the last consumed lexeme.
fn assemble_number(lexemes: &[ClassifiedLexeme], start: usize, tokens: &mut Vec<Token>) -> usize {
    let mut end = start;

    // Comma groups: digit run (, three-digit run)+, then validate the whole
    // chain, since lookahead-one cannot see that "1234,567" groups badly.
    let mut grouped = start;
    while role_at(lexemes, grouped + 1) == Some(PunctuationRole::ThousandsSeparator)
        && category_at(lexemes, grouped + 2) == Some(Category::Digit)
    {
        grouped += 2;
    }
    if grouped > start && GROUPED_NUMBER.is_match(&surface_of(lexemes, start, grouped)) {
        end = grouped;
    }

    if role_at(lexemes, end + 1) == Some(PunctuationRole::DecimalPoint)
        && category_at(lexemes, end + 2) == Some(Category::Digit)
    {
        end += 2;
    }

    if role_at(lexemes, end + 1) == Some(PunctuationRole::HyphenRange)
        && category_at(lexemes, end + 2) == Some(Category::Digit)
    {
        end += 2;
        if role_at(lexemes, end + 1) == Some(PunctuationRole::DecimalPoint)
            && category_at(lexemes, end + 2) == Some(Category::Digit)
        {
            end += 2;
        }
    }

    let surface = surface_of(lexemes, start, end);
    let normalized = surface.replace(',', "");
    tokens.push(Token {
        kind: TokenKind::Number,
        surface,
        normalized,
        span: lexemes[start].lexeme.span.start..lexemes[end].lexeme.span.end,
        role: None,
    });
    end + 1
}

/// Assemble a word starting at a letter run, chaining contraction apostrophes
/// and joining hyphens ("o'neill's", "merry-go-round").
fn assemble_word(
    lexemes: &[ClassifiedLexeme],
    start: usize,
    options: &LexOptions,
    tokens: &mut Vec<Token>,
) -> usize {
    if let Some(next) = try_url(lexemes, start, tokens) {
        return next;
    }

    let mut end = start;
    while matches!(
        role_at(lexemes, end + 1),
        Some(PunctuationRole::Contraction) | Some(PunctuationRole::HyphenJoiner)
    ) && category_at(lexemes, end + 2) == Some(Category::Letter)
    {
        end += 2;
    }

    let surface = surface_of(lexemes, start, end);
    let normalized = options
        .lookup_word(&surface)
        .map(|entry| entry.normalized)
        .unwrap_or_else(|| surface.to_lowercase());
    tokens.push(Token {
        kind: TokenKind::Word,
        surface,
        normalized,
        span: lexemes[start].lexeme.span.start..lexemes[end].lexeme.span.end,
        role: None,
    });
    end + 1
}

/// Collapse adjacent punctuation into one token when the marks repeat the
/// same character ("...", "!!", "--") or are all sentence terminals ("?!").
/// A run containing a terminal is a single terminal, so an ellipsis ends a
/// sentence once rather than three times.
fn assemble_punctuation(
    lexemes: &[ClassifiedLexeme],
    start: usize,
    tokens: &mut Vec<Token>,
) -> usize {
    if let Some(next) = try_tag(lexemes, start, tokens) {
        return next;
    }

    let first = &lexemes[start];
    let mut end = start;

    while let Some(next) = lexemes.get(end + 1) {
        if next.lexeme.category != Category::Punctuation
            || next.lexeme.span.start != lexemes[end].lexeme.span.end
        {
            break;
        }
        let same_mark = next.lexeme.text == first.lexeme.text;
        let both_terminal = first.role == Some(PunctuationRole::SentenceEnd)
            && next.role == Some(PunctuationRole::SentenceEnd);
        if same_mark || both_terminal {
            end += 1;
        } else {
            break;
        }
    }

    let role = lexemes[start..=end]
        .iter()
        .find(|l| l.role == Some(PunctuationRole::SentenceEnd))
        .map_or(first.role, |l| l.role);

    let surface = surface_of(lexemes, start, end);
    tokens.push(Token {
        kind: TokenKind::Punctuation,
        normalized: surface.clone(),
        surface,
        span: lexemes[start].lexeme.span.start..lexemes[end].lexeme.span.end,
        role,
    });
    end + 1
}

/// Punctuation a URL sheds at its end, so "See https://a.com." keeps the
/// final period out of the token and the sentence still terminates.
const URL_TRAILERS: &[char] = &['.', '?', '!', ',', ';', ':', '-'];

/// Assemble a URL when the letter run at `start` is an "http" or "https"
/// scheme glued to "://" and a host. The token runs to the next whitespace,
/// minus trailing sentence punctuation. Returns `None` when no URL starts
/// here.
fn try_url(lexemes: &[ClassifiedLexeme], start: usize, tokens: &mut Vec<Token>) -> Option<usize> {
    let scheme = lexemes[start].lexeme.text.as_str();
    if scheme != "http" && scheme != "https" {
        return None;
    }
    for (offset, expected) in [":", "/", "/"].into_iter().enumerate() {
        let found = lexemes
            .get(start + 1 + offset)
            .map(|l| l.lexeme.text.as_str());
        if found != Some(expected) {
            return None;
        }
    }
    if !matches!(
        category_at(lexemes, start + 4),
        Some(Category::Letter) | Some(Category::Digit)
    ) {
        return None;
    }

    let mut end = start + 4;
    while lexemes
        .get(end + 1)
        .is_some_and(|l| l.lexeme.category != Category::Whitespace)
    {
        end += 1;
    }
    while end > start + 4 && is_url_trailer(&lexemes[end].lexeme) {
        end -= 1;
    }

    let surface = surface_of(lexemes, start, end);
    tokens.push(Token {
        kind: TokenKind::Url,
        normalized: surface.clone(),
        surface,
        span: lexemes[start].lexeme.span.start..lexemes[end].lexeme.span.end,
        role: None,
    });
    Some(end + 1)
}

fn is_url_trailer(lexeme: &RawLexeme) -> bool {
    lexeme.category == Category::Punctuation
        && lexeme
            .text
            .chars()
            .next()
            .is_some_and(|c| URL_TRAILERS.contains(&c))
}

/// Assemble a hashtag or username mention when a "#" or "@" at a word
/// boundary is glued to a following word run. A mark mid-word or standing
/// alone stays ordinary punctuation.
fn try_tag(lexemes: &[ClassifiedLexeme], start: usize, tokens: &mut Vec<Token>) -> Option<usize> {
    let kind = match lexemes[start].lexeme.text.as_str() {
        "#" => TokenKind::Hashtag,
        "@" => TokenKind::Mention,
        _ => return None,
    };
    if start > 0 && category_at(lexemes, start - 1) != Some(Category::Whitespace) {
        return None;
    }

    let mut end = start;
    while lexemes.get(end + 1).is_some_and(|l| is_tag_body(&l.lexeme)) {
        end += 1;
    }
    if end == start {
        return None;
    }

    let surface = surface_of(lexemes, start, end);
    tokens.push(Token {
        kind,
        normalized: surface.to_lowercase(),
        surface,
        span: lexemes[start].lexeme.span.start..lexemes[end].lexeme.span.end,
        role: None,
    });
    Some(end + 1)
}

/// Letters, digits and underscores extend a tag body.
fn is_tag_body(lexeme: &RawLexeme) -> bool {
    matches!(lexeme.category, Category::Letter | Category::Digit) || lexeme.text == "_"
}

fn surface_of(lexemes: &[ClassifiedLexeme], start: usize, end: usize) -> String {
    lexemes[start..=end]
        .iter()
        .map(|l| l.lexeme.text.as_str())
        .collect()
}

fn role_at(lexemes: &[ClassifiedLexeme], i: usize) -> Option<PunctuationRole> {
    lexemes.get(i).and_then(|l| l.role)
}

fn category_at(lexemes: &[ClassifiedLexeme], i: usize) -> Option<Category> {
    lexemes.get(i).map(|l| l.lexeme.category)
}
