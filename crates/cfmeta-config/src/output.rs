//! How registration documents are written.

use serde::{Deserialize, Serialize};

/// Indent of the host registration payload.
const fn default_indent() -> usize {
    4
}

/// Widest indent accepted.
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Spaces per nesting level in emitted JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Emit functions that carry diagnostics too.
    #[serde(default)]
    pub include_failed: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            include_failed: false,
        }
    }
}
