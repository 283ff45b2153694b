//! Parser error types for cfmeta-parser.
//!
//! Metadata extraction itself is total and reports problems as diagnostics;
//! these errors belong to the steps around it.

/// Errors from acquiring source text or preparing a registration.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Module compilation failed: {0}")]
    CompilationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
