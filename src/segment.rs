//! Sentence segmentation
//!
//! The final pipeline stage walks the assembled token stream and groups it
//! into sentences at resolved terminals. Whitespace straight after a terminal
//! rides along with the sentence it follows, so sentence ranges stay
//! contiguous and the next sentence starts at spoken content. An unterminated
//! remainder forms a final sentence with no terminal; input with nothing
//! speakable (empty or whitespace-only) produces no sentences at all.

use crate::tokens::{Sentence, Token};

/// Group tokens into sentences.
pub fn segment(tokens: &[Token]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].is_sentence_terminal() {
            let terminal = i;
            let mut end = i + 1;
            while end < tokens.len() && tokens[end].is_whitespace() {
                end += 1;
            }
            sentences.push(Sentence {
                tokens: start..end,
                terminal: Some(terminal),
            });
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }

    if start < tokens.len() {
        if tokens[start..].iter().any(|t| !t.is_whitespace()) {
            sentences.push(Sentence {
                tokens: start..tokens.len(),
                terminal: None,
            });
        } else if let Some(last) = sentences.last_mut() {
            last.tokens.end = tokens.len();
        }
        // Whitespace-only input with no preceding sentence: nothing to say.
    }

    sentences
}
