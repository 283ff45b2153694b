//! Ordered, per-function diagnostic collection.

use cfmeta_core::{Diagnostic, SourcePosition};

/// Diagnostics gathered while extracting one function, in discovery order.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub(crate) fn push(&mut self, message: impl Into<String>, position: SourcePosition) {
        self.entries.push(Diagnostic::at(message, position));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
