//! Card number domain types

use serde::{Deserialize, Serialize};

/// A physical card number within a set.
pub type CardNumber = i64;

/// Smallest card number the scanner will emit.
pub const MIN_CARD_NUMBER: CardNumber = 1;

/// Largest card number the scanner will emit.
pub const MAX_CARD_NUMBER: CardNumber = 9999;

/// Whether a value lies in the range the number scanner may emit.
///
/// Zero and anything above [`MAX_CARD_NUMBER`] are treated as "not a number
/// worth keeping" rather than as errors.
pub fn is_valid_card_number(n: CardNumber) -> bool {
    (MIN_CARD_NUMBER..=MAX_CARD_NUMBER).contains(&n)
}

/// A card id with an explicit or inferred quantity.
///
/// Produced by the pair extractor from phrases like "card 55 q 20".
/// `confidence` is a closed four-level score, not a computed probability:
/// 0.98 when the quantity was signaled with an explicit keyword, 0.85 when
/// no quantity was spoken and it defaulted to 1, 0.70 when the quantity was
/// taken positionally, and capped at 0.5 when the resolved quantity is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardQuantity {
    /// Card number the quantity applies to
    pub card_id: CardNumber,
    /// Resolved quantity (defaults to 1 when none was spoken)
    pub qty: i64,
    /// Extraction certainty in `[0.0, 1.0]`
    pub confidence: f64,
}

impl CardQuantity {
    pub fn new(card_id: CardNumber, qty: i64, confidence: f64) -> Self {
        Self {
            card_id,
            qty,
            confidence,
        }
    }
}
