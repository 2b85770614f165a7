//! Compound-number matching
//!
//! Longest-match over a short lookahead window, no backtracking. The
//! grammar is deliberately asymmetric and dictation sessions rely on the
//! asymmetries:
//! - teens after "hundred" take no trailing ones digit, tens do
//! - two simple numbers never merge ("twenty twenty" stays 20, 20)
//! - "and" is consumed only directly after "<n> hundred"

use crate::lexicon;

/// Decode one token on its own: lexicon word or digit string.
pub(crate) fn parse_single(token: &str) -> Option<i64> {
    if let Some(v) = lexicon::word_value(token) {
        return Some(v);
    }
    token.parse::<i64>().ok()
}

fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Consume 1..=5 tokens starting at `start` into one integer value.
///
/// Returns `(value, tokens_consumed)`, or `(None, 0)` when the window does
/// not start with a number. Out-of-range `start` returns `(None, 0)`;
/// digit runs too large for `i64` are not numbers.
pub fn match_compound(tokens: &[String], start: usize) -> (Option<i64>, usize) {
    let Some(token) = tokens.get(start) else {
        return (None, 0);
    };

    if is_digit_token(token) {
        return match token.parse::<i64>() {
            Ok(v) => (Some(v), 1),
            Err(_) => (None, 0),
        };
    }

    let Some(mut value) = lexicon::word_value(token) else {
        return (None, 0);
    };
    let mut consumed = 1;

    // Hundreds: "three hundred [and] forty two", "one hundred 5"
    if (1..=9).contains(&value) && tokens.get(start + 1).is_some_and(|t| t == "hundred") {
        value *= 100;
        consumed = 2;
        if tokens.get(start + consumed).is_some_and(|t| t == "and") {
            consumed += 1;
        }
        if let Some(tail) = tokens.get(start + consumed).and_then(|t| parse_single(t)) {
            if (1..=19).contains(&tail) {
                value += tail;
                consumed += 1;
            } else if (20..=90).contains(&tail) {
                value += tail;
                consumed += 1;
                if let Some(ones) = tokens.get(start + consumed).and_then(|t| parse_single(t)) {
                    if (1..=9).contains(&ones) {
                        value += ones;
                        consumed += 1;
                    }
                }
            }
        }
        return (Some(value), consumed);
    }

    // Compound tens: "twenty three", "forty 3"
    if (20..=90).contains(&value) {
        if let Some(ones) = tokens.get(start + 1).and_then(|t| parse_single(t)) {
            if (1..=9).contains(&ones) {
                value += ones;
                consumed = 2;
            }
        }
        return (Some(value), consumed);
    }

    // Simple single number (teens, standalone "hundred", mishearings)
    (Some(value), consumed)
}
