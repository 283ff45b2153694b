//! Cross-cutting error types for cfmeta.
//!
//! Extraction problems are never errors: they are `Diagnostic`s attached to
//! the function they concern. The errors here cover encoding the results.

use thiserror::Error;

/// Errors that can be raised by any cfmeta crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON encoding of a document failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Encoded output was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),
}
