//! Transcript handoff types
//!
//! The speech engine lives outside this workspace; it hands over already
//! transcribed text in chunks. This type is the unit of that handoff.

use serde::{Deserialize, Serialize};

/// A transcribed chunk of speech from the external STT engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Transcribed text (may be empty when the chunk held no speech)
    pub text: String,
    /// Engine-reported confidence, when the engine provides one
    pub confidence: Option<f32>,
    /// Whether this is a final transcript or a streaming partial
    pub is_final: bool,
}

impl TranscriptResult {
    /// A final transcript with no engine confidence attached.
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
            is_final: true,
        }
    }
}
