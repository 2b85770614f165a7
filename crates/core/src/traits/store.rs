//! Collection storage interface
//!
//! The real backend is a relational store owned by the API layer; this
//! crate only specifies the operations the voice flow needs against it.
//! [`MemoryCollectionStore`] is the in-memory double used in tests and
//! local development.

use std::collections::HashMap;

use crate::card::CardNumber;
use crate::error::{Error, Result};

/// A stored card row as the voice flow sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredCard {
    pub set_id: i64,
    pub card_number: CardNumber,
    pub qty: i64,
}

/// Storage operations the voice flow performs.
pub trait CollectionStore: Send + Sync {
    /// Ensure a row exists for the card; returns its current quantity.
    fn upsert_card(&mut self, set_id: i64, card_number: CardNumber) -> Result<i64>;

    /// Add `delta` to a card's quantity, creating the row if needed.
    /// The stored quantity never goes below zero. Returns the new quantity.
    fn bump_quantity(&mut self, set_id: i64, card_number: CardNumber, delta: i64) -> Result<i64>;

    /// Current quantity of a card, or `Error::NotFound` when absent.
    fn quantity(&self, set_id: i64, card_number: CardNumber) -> Result<i64>;

    /// All cards in a set, ordered by card number.
    fn cards_in_set(&self, set_id: i64) -> Result<Vec<StoredCard>>;
}

/// In-memory store used by tests and local development.
#[derive(Debug, Default)]
pub struct MemoryCollectionStore {
    rows: HashMap<(i64, CardNumber), i64>,
}

impl MemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryCollectionStore {
    fn upsert_card(&mut self, set_id: i64, card_number: CardNumber) -> Result<i64> {
        Ok(*self.rows.entry((set_id, card_number)).or_insert(0))
    }

    fn bump_quantity(&mut self, set_id: i64, card_number: CardNumber, delta: i64) -> Result<i64> {
        let qty = self.rows.entry((set_id, card_number)).or_insert(0);
        *qty = (*qty + delta).max(0);
        Ok(*qty)
    }

    fn quantity(&self, set_id: i64, card_number: CardNumber) -> Result<i64> {
        self.rows
            .get(&(set_id, card_number))
            .copied()
            .ok_or_else(|| Error::NotFound(format!("card {card_number} in set {set_id}")))
    }

    fn cards_in_set(&self, set_id: i64) -> Result<Vec<StoredCard>> {
        let mut cards: Vec<StoredCard> = self
            .rows
            .iter()
            .filter(|((sid, _), _)| *sid == set_id)
            .map(|((sid, num), qty)| StoredCard {
                set_id: *sid,
                card_number: *num,
                qty: *qty,
            })
            .collect();
        cards.sort_by_key(|c| c.card_number);
        Ok(cards)
    }
}
