//! Parser surface consumed by the request layer

use crate::card::{CardNumber, CardQuantity};

/// The transcript-parsing surface the request layer consumes.
///
/// The request layer picks the entry point per utterance: pair extraction
/// when the raw text mentions "card" (case-insensitive), plain number
/// scanning otherwise. That branch belongs to the caller; implementations
/// only provide the two operations.
///
/// Both operations are total: any string input yields a (possibly empty)
/// result, never an error.
pub trait TranscriptParser: Send + Sync {
    /// Parse spoken text into an ordered list of card numbers,
    /// duplicates preserved.
    fn parse_numbers(&self, text: &str) -> Vec<CardNumber>;

    /// Parse spoken text into explicit `(card, quantity)` pairs.
    fn parse_quantities(&self, text: &str) -> Vec<CardQuantity>;
}
