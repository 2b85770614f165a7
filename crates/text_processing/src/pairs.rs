//! Card/quantity pair extraction
//!
//! A second grammar layered on the number scanner: the cleaned transcript
//! is split into segments on the word "card", and each segment is searched
//! for a card id followed by an explicit quantity ("q 20", "qty20") or a
//! positional one. Confidence is a closed four-level policy, not a
//! computed probability.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use cardvoice_core::CardQuantity;

use crate::compound::match_compound;
use crate::lexicon;
use crate::normalize;

/// Confidence when the quantity was signaled with an explicit keyword.
pub const CONFIDENCE_EXPLICIT: f64 = 0.98;
/// Confidence when no quantity was spoken and it defaulted to 1.
pub const CONFIDENCE_DEFAULTED: f64 = 0.85;
/// Confidence when the quantity was taken positionally.
pub const CONFIDENCE_POSITIONAL: f64 = 0.70;
/// Ceiling applied when the resolved quantity is zero.
pub const CONFIDENCE_ZERO_QTY_CAP: f64 = 0.5;

static CARD_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcard\b").unwrap());
static LEADING_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)(.*)$").unwrap());
static DIGIT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());
static DIGITS_THEN_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)([a-z]+)").unwrap());

/// The request layer's branch predicate: run pair extraction when the raw
/// text mentions "card" anywhere, case-insensitive; otherwise fall back to
/// the plain number scanner.
pub fn mentions_card_keyword(text: &str) -> bool {
    text.to_lowercase().contains("card")
}

/// Parse text for explicit `card <id> [q <qty>]` pairs.
///
/// Segments with no recognizable card id contribute nothing. Unlike the
/// number scanner, ids and quantities here are not range-gated.
pub fn parse_card_quantities(text: &str) -> Vec<CardQuantity> {
    let cleaned = normalize::clean(text);
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut pairs = Vec::new();
    for segment in CARD_SPLIT.split(&cleaned) {
        let tokens: Vec<String> = segment.split_whitespace().map(str::to_string).collect();
        if tokens.is_empty() {
            continue;
        }
        match parse_segment(&tokens) {
            Some(pair) => {
                debug!(
                    card_id = pair.card_id,
                    qty = pair.qty,
                    confidence = pair.confidence,
                    "extracted pair"
                );
                pairs.push(pair);
            }
            None => trace!(segment, "segment had no card id, dropped"),
        }
    }
    pairs
}

fn parse_segment(tokens: &[String]) -> Option<CardQuantity> {
    let (card_id, mut i, remainder) = find_card_id(tokens)?;

    let mut qty: Option<i64> = None;
    let mut explicit = false;

    // Quantity attached to the id token itself, e.g. "27q9".
    if let Some(rem) = remainder {
        if let Some((_kw, after)) = lexicon::strip_qty_keyword(rem) {
            explicit = true;
            qty = leading_number(after);
        }
    }

    if qty.is_none() {
        while i < tokens.len() {
            let token = &tokens[i];

            if lexicon::is_skip_word(token) {
                i += 1;
                continue;
            }

            // Explicit keyword, digits attached ("q9") or in the next token.
            if let Some((_kw, after)) = lexicon::strip_qty_keyword(token) {
                explicit = true;
                if let Some(v) = leading_number(after) {
                    qty = Some(v);
                    break;
                }
                if i + 1 < tokens.len() {
                    let (num, _) = match_compound(tokens, i + 1);
                    if let Some(v) = num {
                        qty = Some(v);
                        break;
                    }
                    if let Some(v) = leading_number(&tokens[i + 1]) {
                        qty = Some(v);
                        break;
                    }
                }
                // Dangling keyword: keep scanning. The explicit flag
                // survives, so a later positional number still counts as
                // keyword-signaled.
                i += 1;
                continue;
            }

            // Number with the keyword attached behind it, e.g. "9q".
            if let Some(caps) = DIGITS_THEN_LETTERS.captures(token) {
                if lexicon::is_qty_keyword(&caps[2]) {
                    if let Ok(v) = caps[1].parse::<i64>() {
                        qty = Some(v);
                        break;
                    }
                }
            }

            // Positional fallback: first decodable number is the quantity.
            let (num, _) = match_compound(tokens, i);
            if let Some(v) = num {
                qty = Some(v);
                break;
            }

            i += 1;
        }
    }

    Some(finalize(card_id, qty, explicit))
}

/// Locate the first number in the segment. Returns the id, the index after
/// it, and the non-digit remainder when the id was split off a token like
/// "27q9".
fn find_card_id(tokens: &[String]) -> Option<(i64, usize, Option<&str>)> {
    let mut i = 0;
    while i < tokens.len() {
        let (value, consumed) = match_compound(tokens, i);
        if let Some(v) = value {
            return Some((v, i + consumed, None));
        }
        if let Some(caps) = LEADING_DIGITS.captures(&tokens[i]) {
            if let Ok(v) = caps[1].parse::<i64>() {
                let rest = caps
                    .get(2)
                    .map(|m| m.as_str())
                    .filter(|s| !s.is_empty());
                return Some((v, i + 1, rest));
            }
        }
        i += 1;
    }
    None
}

fn leading_number(s: &str) -> Option<i64> {
    DIGIT_PREFIX.find(s)?.as_str().parse::<i64>().ok()
}

fn finalize(card_id: i64, qty: Option<i64>, explicit: bool) -> CardQuantity {
    let (qty, mut confidence) = match qty {
        None => (1, CONFIDENCE_DEFAULTED),
        Some(q) if explicit => (q, CONFIDENCE_EXPLICIT),
        Some(q) => (q, CONFIDENCE_POSITIONAL),
    };
    let qty = qty.abs();
    if qty == 0 {
        // zero quantity usually means a mis-hearing; keep the pair, flag it
        confidence = confidence.min(CONFIDENCE_ZERO_QTY_CAP);
    }
    CardQuantity::new(card_id, qty, confidence)
}
