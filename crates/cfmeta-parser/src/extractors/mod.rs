//! Custom function metadata extraction.
//!
//! One pass over the program's top-level declarations. Every function tagged
//! `@customfunction` yields a descriptor, an association record and its
//! diagnostics; nothing here fails.

pub(crate) mod assemble;
pub(crate) mod diagnostics;
pub mod enums;
pub(crate) mod helpers;
pub mod jsdoc;
pub mod params;
pub(crate) mod resolve;
pub mod types;
pub(crate) mod validate;
pub(crate) mod walker;

use ast_grep_language::SupportLang;
use cfmeta_core::ParseTreeResult;

use crate::parser::{detect_language, parse_source};
use enums::EnumIndex;
use walker::{ParserState, top_level_declarations};

/// Extract custom function metadata from `source`.
///
/// `label` picks the grammar by extension (TypeScript when unknown).
/// Identical input always produces identical output.
#[must_use]
pub fn parse_tree(source: &str, label: &str) -> ParseTreeResult {
    let lang = detect_language(label).unwrap_or(SupportLang::TypeScript);
    let tree = parse_source(source, lang);
    let enums = EnumIndex::build(&tree, lang);
    if !enums.is_empty() {
        tracing::trace!(label, enums = enums.len(), "indexed enum declarations");
    }

    let mut state = ParserState::new(enums);
    for declaration in top_level_declarations(&tree.root()) {
        state.visit(&declaration);
    }
    let result = state.finish();

    tracing::debug!(
        label,
        functions = result.functions.len(),
        with_errors = result.extras.iter().filter(|e| !e.errors.is_empty()).count(),
        "parsed custom functions"
    );
    result
}

#[cfg(test)]
mod tests;
