//! Dictation session accumulation
//!
//! The request layer streams transcript chunks during a live session; the
//! tally collects every parsed number so running totals survive across
//! chunks until the user clears them.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::scanner::SpokenNumberParser;
use crate::summary::{count_cards, format_summary};

/// Snapshot of a dictation session, shaped for the JSON response the
/// request layer returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResults {
    /// Every number heard, in spoken order, duplicates preserved
    pub numbers: Vec<i64>,
    /// Frequency count per card number
    pub counts: HashMap<i64, i64>,
    /// Rendered "Have:" line
    pub output: String,
    /// Distinct card numbers heard
    pub unique: usize,
    /// Total numbers heard including duplicates
    pub total: usize,
}

/// Accumulates parsed numbers across transcript chunks.
#[derive(Debug, Default)]
pub struct SessionTally {
    parser: SpokenNumberParser,
    numbers: Vec<i64>,
}

impl SessionTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a parser with non-default gates.
    pub fn with_parser(parser: SpokenNumberParser) -> Self {
        Self {
            parser,
            numbers: Vec::new(),
        }
    }

    /// Parse a transcript chunk and fold its numbers into the tally.
    /// Returns the numbers found in this chunk.
    pub fn ingest(&mut self, text: &str) -> Vec<i64> {
        let found = self.parser.parse(text);
        if !found.is_empty() {
            debug!(count = found.len(), "session ingested numbers");
            self.numbers.extend_from_slice(&found);
        }
        found
    }

    /// Fold pre-parsed numbers into the tally.
    pub fn extend(&mut self, numbers: &[i64]) {
        self.numbers.extend_from_slice(numbers);
    }

    /// Drop everything accumulated so far.
    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Every number heard so far, in spoken order.
    pub fn numbers(&self) -> &[i64] {
        &self.numbers
    }

    /// Render the running totals.
    pub fn results(&self) -> SessionResults {
        let counts = count_cards(&self.numbers);
        SessionResults {
            numbers: self.numbers.clone(),
            unique: counts.len(),
            total: self.numbers.len(),
            output: format_summary(&self.numbers),
            counts,
        }
    }
}
