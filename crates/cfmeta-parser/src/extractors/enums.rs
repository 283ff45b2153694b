//! Pre-scan for user-declared `enum` names.

use std::collections::HashSet;

use ast_grep_core::matcher::KindMatcher;
use ast_grep_language::SupportLang;

use crate::parser::AstTree;

/// Names of every `enum` declared anywhere in one source file.
///
/// Lookups are exact: `Color` does not match `color`.
#[derive(Debug, Default, Clone)]
pub struct EnumIndex {
    names: HashSet<String>,
}

impl EnumIndex {
    /// Scan the whole tree, including nested scopes.
    #[must_use]
    pub fn build(tree: &AstTree, lang: SupportLang) -> Self {
        let matcher = KindMatcher::new("enum_declaration", lang);
        let names = tree
            .root()
            .find_all(&matcher)
            .filter_map(|node| node.field("name").map(|name| name.text().to_string()))
            .collect();
        Self { names }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for EnumIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    #[test]
    fn collects_top_level_and_nested_enums() {
        let source = r"
enum Color { Red, Green }
export enum Size { Small }
namespace Inner {
    export const enum Mode { On, Off }
}
function local() {
    enum Hidden { A }
}
";
        let tree = parse_source(source, SupportLang::TypeScript);
        let index = EnumIndex::build(&tree, SupportLang::TypeScript);
        assert_eq!(index.len(), 4);
        for name in ["Color", "Size", "Mode", "Hidden"] {
            assert!(index.contains(name), "missing {name}");
        }
        assert!(!index.contains("color"));
    }

    #[test]
    fn empty_source_has_no_enums() {
        let tree = parse_source("function f() {}", SupportLang::TypeScript);
        assert!(EnumIndex::build(&tree, SupportLang::TypeScript).is_empty());
    }
}
