//! Static word tables for the spoken-number grammar
//!
//! Built once at first use, read-only afterwards. The word→number table
//! carries the homophones and near-misses speech engines actually produce
//! for digits spoken in isolation ("won" → 1, "fitty" → 50), collected from
//! live dictation sessions.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

static WORD_TO_NUM: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        // Basic digits
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        // Common mishearings
        ("won", 1),
        ("wan", 1),
        ("wun", 1),
        ("to", 2),
        ("too", 2),
        ("tu", 2),
        ("tew", 2),
        ("tree", 3),
        ("free", 3),
        ("for", 4),
        ("fore", 4),
        ("fo", 4),
        ("fife", 5),
        ("sick", 6),
        ("sicks", 6),
        ("ate", 8),
        ("nein", 9),
        // Teens
        ("ten", 10),
        ("tin", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
        // Tens
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fourty", 40),
        ("fifty", 50),
        ("fitty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
        // Standalone hundred ("a hundred" arrives here as just "hundred")
        ("hundred", 100),
    ])
});

/// Filler tokens consumed with no effect on output or scanner state.
static SKIP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "and", "the", "a", "an", "um", "uh", "like", "okay", "ok", "card", "number", "hash",
        "pound", "next", "then", "also", "have", "got", "need", "want", "is", "are", "it", "that",
        "this", "so", "yeah", "yes", "no", "not", "with", "from",
    ])
});

/// Trigger words that expand the most recently emitted number.
static MULT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "times", "x", "of", "count", "quantity", "qty", "stock", "copies", "copy", "ex",
    ])
});

/// Quantity-keyword variants the pair extractor recognizes, longest first
/// so prefix matching is deterministic ("qty20" matches "qty", never "q").
pub const QTY_KEYWORDS: &[&str] = &["quantity", "count", "times", "qty", "que", "cue", "x", "q"];

/// Numeric value of a lexicon word, canonical or misheard.
pub fn word_value(token: &str) -> Option<i64> {
    WORD_TO_NUM.get(token).copied()
}

pub fn is_skip_word(token: &str) -> bool {
    SKIP_WORDS.contains(token)
}

pub fn is_multiplier_word(token: &str) -> bool {
    MULT_WORDS.contains(token)
}

/// Split a quantity keyword off the front of a token.
/// `"qty20"` → `("qty", "20")`, `"q"` → `("q", "")`.
pub fn strip_qty_keyword(token: &str) -> Option<(&'static str, &str)> {
    QTY_KEYWORDS
        .iter()
        .copied()
        .find(|kw| token.starts_with(kw))
        .map(|kw| (kw, &token[kw.len()..]))
}

/// Exact-match check used for tokens shaped like `"9q"`.
pub fn is_qty_keyword(word: &str) -> bool {
    QTY_KEYWORDS.contains(&word)
}
