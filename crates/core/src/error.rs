//! Error types shared across the workspace
//!
//! The parsing functions themselves are total and never return these; they
//! exist for the fallible collaborator seams (storage, transport) that the
//! parsing core is consumed by.

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
