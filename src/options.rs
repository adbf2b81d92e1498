//! Lexer configuration
//!
//! Options are per-lexer, read-only during a call: an optional dictionary
//! lookup callback consulted once per word token, and an abbreviation stem
//! set overriding the built-in default. The default set is deliberately
//! conservative; an unknown stem still gets the lowercase-continuation
//! heuristic, and a spurious sentence break is cheaper than a merged one.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Stems (without the trailing period) treated as abbreviations. Lowercase;
/// matching is case-insensitive.
static DEFAULT_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "etc", "vs", "approx",
        "apt", "ave", "blvd", "capt", "col", "dept", "est", "fig", "gen", "gov", "inc", "lt",
        "ltd", "no", "sgt", "vol",
    ]
    .into_iter()
    .collect()
});

/// A dictionary lookup result for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    /// Canonical normalized form to use instead of plain lowercasing
    pub normalized: String,
    /// Optional pluralization hint for downstream inflection
    pub plural: Option<String>,
}

/// The dictionary lookup callback. Called at most once per word token; a
/// `None` result (or no callback at all) falls back to lowercasing. The
/// lexer treats the callback as a pure, synchronous function and never caches
/// across calls.
pub type LookupFn = dyn Fn(&str) -> Option<LookupEntry> + Send + Sync;

/// Per-lexer configuration.
#[derive(Default)]
pub struct LexOptions {
    lookup: Option<Box<LookupFn>>,
    abbreviations: Option<HashSet<String>>,
}

impl LexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a dictionary lookup callback, consulted per word token.
    pub fn with_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<LookupEntry> + Send + Sync + 'static,
    ) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    /// Replace the default abbreviation stems. Matching is case-insensitive.
    pub fn with_abbreviations(mut self, stems: HashSet<String>) -> Self {
        self.abbreviations = Some(stems.into_iter().map(|s| s.to_lowercase()).collect());
        self
    }

    /// True if `stem` (a letter run, without its period) is a known
    /// abbreviation.
    pub(crate) fn is_abbreviation(&self, stem: &str) -> bool {
        let stem = stem.to_lowercase();
        match &self.abbreviations {
            Some(set) => set.contains(&stem),
            None => DEFAULT_ABBREVIATIONS.contains(stem.as_str()),
        }
    }

    /// Run the lookup callback for one word, if a callback was supplied.
    pub(crate) fn lookup_word(&self, surface: &str) -> Option<LookupEntry> {
        self.lookup.as_ref().and_then(|lookup| lookup(surface))
    }
}
