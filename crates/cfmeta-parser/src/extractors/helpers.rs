//! Shared node helpers used across the extractors.

use ast_grep_core::{Doc, Node};
use cfmeta_core::SourcePosition;

/// 1-based start position of a node.
pub(crate) fn start_position<D: Doc>(node: &Node<D>) -> SourcePosition {
    let pos = node.start_pos();
    SourcePosition::from_zero_based(pos.line(), pos.column(node))
}

/// 1-based end position of a node.
pub(crate) fn end_position<D: Doc>(node: &Node<D>) -> SourcePosition {
    let pos = node.end_pos();
    SourcePosition::from_zero_based(pos.line(), pos.column(node))
}

/// Named children, skipping punctuation and interleaved comments.
pub(crate) fn named_children<'r, D: Doc>(node: &Node<'r, D>) -> Vec<Node<'r, D>> {
    node.children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment")
        .collect()
}

/// The type node inside a `: T` annotation.
///
/// Nodes that are not plain `type_annotation`s (e.g. `asserts x`) are
/// returned as-is so callers classify them as unsupported syntax.
pub(crate) fn annotated_type<'r, D: Doc>(annotation: Node<'r, D>) -> Option<Node<'r, D>> {
    if annotation.kind().as_ref() == "type_annotation" {
        named_children(&annotation).into_iter().next()
    } else {
        Some(annotation)
    }
}

/// Replace CRLF and lone CR line endings with LF.
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
