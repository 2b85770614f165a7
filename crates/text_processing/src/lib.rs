//! Spoken-number parsing for card dictation transcripts
//!
//! Turns noisy speech-to-text output into exact card numbers and
//! quantities:
//! - **Normalizer**: lowercases, strips dashes and punctuation, tokenizes
//! - **Lexicon**: word→number tables covering common mishearings
//! - **Compound matcher**: "three hundred forty two" → 342, no backtracking
//! - **Scanner**: ordered card-number sequence with multiplier expansion
//!   ("42 times 3" → three 42s)
//! - **Pair extractor**: "card 55 q 20" → (55, 20) with a confidence score
//! - **Session tally**: accumulates results across dictation chunks
//!
//! Every parsing entry point is total: any string input yields a (possibly
//! empty) result, never an error.
//!
//! # Example
//!
//! ```
//! use cardvoice_text_processing::{format_summary, parse_spoken_numbers};
//!
//! let numbers = parse_spoken_numbers("forty two times three and fifty five");
//! assert_eq!(numbers, vec![42, 42, 42, 55]);
//! assert_eq!(format_summary(&numbers), "Have: 42 x3, 55");
//! ```

pub mod compound;
pub mod lexicon;
pub mod normalize;
pub mod pairs;
pub mod scanner;
pub mod session;
pub mod summary;

pub use pairs::{mentions_card_keyword, parse_card_quantities};
pub use scanner::{parse_spoken_numbers, ConfigError, ScanState, SpokenNumberParser};
pub use session::{SessionResults, SessionTally};
pub use summary::{count_cards, format_summary};
