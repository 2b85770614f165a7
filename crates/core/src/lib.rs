//! Core types and traits for the CardVoice backend
//!
//! This crate provides the foundational types shared across the workspace:
//! - Card number bounds and the parsed `(card, quantity)` pair type
//! - Transcript handoff types from the speech engine
//! - Traits for pluggable collaborators (parser surface, collection store)
//! - Error types

pub mod card;
pub mod error;
pub mod traits;
pub mod transcript;

pub use card::{is_valid_card_number, CardNumber, CardQuantity, MAX_CARD_NUMBER, MIN_CARD_NUMBER};
pub use error::{Error, Result};
pub use transcript::TranscriptResult;

// Trait re-exports
pub use traits::{CollectionStore, MemoryCollectionStore, StoredCard, TranscriptParser};
