//! ast-grep wrapper: language detection from the source label and tree building.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the script language from a file label's extension.
///
/// Returns `None` for labels without a recognized script extension.
#[must_use]
pub fn detect_language(label: &str) -> Option<SupportLang> {
    let (_, ext) = label.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        "tsx" | "jsx" => Some(SupportLang::Tsx),
        "js" | "mjs" | "cjs" => Some(SupportLang::JavaScript),
        _ => None,
    }
}

/// Parse source text into an ast-grep tree for the given language.
///
/// Malformed input still yields a tree: tree-sitter recovers with `ERROR`
/// nodes around the parts it could not place.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Parse `source`, picking the grammar from `label` (TypeScript when unknown).
#[must_use]
pub fn build_tree(source: &str, label: &str) -> AstTree {
    let lang = detect_language(label).unwrap_or(SupportLang::TypeScript);
    parse_source(source, lang)
}

/// Read a source file as UTF-8 text.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read.
pub fn load_source(path: &Path) -> Result<String, ParserError> {
    Ok(std::fs::read_to_string(path)?)
}
