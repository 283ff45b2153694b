pub mod check;
pub mod dispatch;
pub mod generate;
pub mod parse;
pub mod schema;

use std::path::Path;

use anyhow::Context;

/// Read a source file; the label is its path as given, which also picks
/// the grammar.
pub fn read_source(path: &Path) -> anyhow::Result<(String, String)> {
    let source = cfmeta_parser::load_source(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    Ok((source, path.display().to_string()))
}
