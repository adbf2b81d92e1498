//! Scenario tests for punctuation disambiguation and token assembly
//!
//! Table-driven cases covering the ambiguity classes the lexer exists to
//! resolve: sentence-terminal vs. abbreviation vs. decimal periods, joiner
//! vs. range hyphens, contraction vs. quote apostrophes.

use rstest::rstest;
use sentlex::{lex, PunctuationRole, TokenKind};

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, t.surface))
        .collect()
}

#[rstest]
#[case("Dr. Smith went home.", 1)]
#[case("Mr. smith is here.", 1)]
#[case("It works. It really does.", 2)]
#[case("One. Two. Three.", 3)]
#[case("No terminal", 1)]
#[case("", 0)]
#[case("   ", 0)]
#[case("Wait... Go.", 2)]
fn sentence_counts(#[case] source: &str, #[case] expected: usize) {
    assert_eq!(lex(source).sentences.len(), expected, "in {:?}", source);
}

#[rstest]
#[case("Dr. Smith", ".", PunctuationRole::AbbreviationMark)]
#[case("etc. and so on", ".", PunctuationRole::AbbreviationMark)]
#[case("went home.", ".", PunctuationRole::SentenceEnd)]
#[case("what? no", "?", PunctuationRole::SentenceEnd)]
#[case("one: two", ":", PunctuationRole::Generic)]
#[case("one; two", ";", PunctuationRole::Generic)]
#[case("hello, world", ",", PunctuationRole::Generic)]
#[case("but - no", "-", PunctuationRole::Generic)]
fn punctuation_roles(
    #[case] source: &str,
    #[case] mark: &str,
    #[case] expected: PunctuationRole,
) {
    let result = lex(source);
    let token = result
        .tokens
        .iter()
        .find(|t| t.surface == mark)
        .unwrap_or_else(|| panic!("no {:?} token in {:?}", mark, source));
    assert_eq!(token.role, Some(expected));
}

#[rstest]
#[case("3.50", "3.50")]
#[case("25.15", "25.15")]
#[case("1,000,000", "1000000")]
#[case("1,234.56", "1234.56")]
#[case("9-5", "9-5")]
fn numbers_assemble_into_one_token(#[case] source: &str, #[case] normalized: &str) {
    let result = lex(source);
    assert_eq!(result.tokens.len(), 1, "in {:?}", source);
    assert_eq!(result.tokens[0].kind, TokenKind::Number);
    assert_eq!(result.tokens[0].normalized, normalized);
}

#[rstest]
#[case("don't")]
#[case("haven't")]
#[case("she'll")]
#[case("it'd")]
#[case("might've")]
#[case("o'neill's")]
#[case("o'clock")]
fn contractions_are_single_words(#[case] source: &str) {
    let result = lex(source);
    assert_eq!(result.tokens.len(), 1, "in {:?}", source);
    assert_eq!(result.tokens[0].kind, TokenKind::Word);
    assert_eq!(result.tokens[0].surface, source);
}

#[rstest]
#[case("https://google.com", TokenKind::Url)]
#[case("http://127.0.0.1", TokenKind::Url)]
#[case("http://127.0.0.1/my/page.html?foo=bar&bin=baz#hah", TokenKind::Url)]
#[case("#rust", TokenKind::Hashtag)]
#[case("#tag_2024", TokenKind::Hashtag)]
#[case("@echelon", TokenKind::Mention)]
fn web_entities_are_single_tokens(#[case] source: &str, #[case] kind: TokenKind) {
    let result = lex(source);
    assert_eq!(result.tokens.len(), 1, "in {:?}", source);
    assert_eq!(result.tokens[0].kind, kind);
    assert_eq!(result.tokens[0].surface, source);
}

#[test]
fn web_entities_mix_with_words() {
    let tokens = kinds("Go to https://google.com and #rust by @echelon");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Word, "Go".to_string()),
            (TokenKind::Word, "to".to_string()),
            (TokenKind::Url, "https://google.com".to_string()),
            (TokenKind::Word, "and".to_string()),
            (TokenKind::Hashtag, "#rust".to_string()),
            (TokenKind::Word, "by".to_string()),
            (TokenKind::Mention, "@echelon".to_string()),
        ]
    );
}

#[test]
fn hyphen_compound_vs_range() {
    let tokens = kinds("well-known 9-5 job");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Word, "well-known".to_string()),
            (TokenKind::Number, "9-5".to_string()),
            (TokenKind::Word, "job".to_string()),
        ]
    );
}

#[test]
fn simple_sentence_with_punctuation() {
    let tokens = kinds("This, right here, is a sentence.");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Word, "This".to_string()),
            (TokenKind::Punctuation, ",".to_string()),
            (TokenKind::Word, "right".to_string()),
            (TokenKind::Word, "here".to_string()),
            (TokenKind::Punctuation, ",".to_string()),
            (TokenKind::Word, "is".to_string()),
            (TokenKind::Word, "a".to_string()),
            (TokenKind::Word, "sentence".to_string()),
            (TokenKind::Punctuation, ".".to_string()),
        ]
    );
}

#[test]
fn integers_and_words_mix() {
    let tokens = kinds("9 out of 10 agree");
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Number, "9".to_string()),
            (TokenKind::Word, "out".to_string()),
            (TokenKind::Word, "of".to_string()),
            (TokenKind::Number, "10".to_string()),
            (TokenKind::Word, "agree".to_string()),
        ]
    );
}

#[rstest]
#[case(".")]
#[case("...")]
#[case(". . .")]
#[case("yes!!!!!")]
#[case("yes!!!!1??")]
#[case("dashes--emdash")]
#[case("This does not work!?")]
#[case("haven't, how're, she'll, isn't, it'll, it'd, donald's")]
#[case("'nuff, 'em, o'clock, will-o'-the-wisp")]
#[case("I'm sorry you can't do it.")]
#[case("That is \"good\" enough")]
#[case("iOHuijahdfkjq2nero88u928nkjwfn  qio23u980HjkH@!J#Kj1j 1j4o2o")]
fn adversarial_inputs_round_trip(#[case] source: &str) {
    assert_eq!(lex(source).surface(), source);
}
