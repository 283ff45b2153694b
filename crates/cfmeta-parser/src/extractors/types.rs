//! Closed classification of type syntax.
//!
//! Declared annotations and `JSDoc` `{...}` expressions are both classified
//! into a [`TypeDescriptor`], so resolution never inspects raw node kinds.

use ast_grep_core::{Doc, Node};
use ast_grep_language::SupportLang;
use cfmeta_core::{SourcePosition, ValueType};

use super::enums::EnumIndex;
use super::helpers::{named_children, start_position};
use crate::parser::parse_source;

/// Shape of one type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// `number`, `string`, `boolean` or `any`.
    Primitive(ValueType),
    /// `T[]`.
    Array(Box<Self>),
    /// A named reference, with type arguments when written as `Name<...>`.
    Generic { name: String, args: Vec<Self> },
    /// `Promise<T>` with exactly one argument.
    Deferred(Box<Self>),
    Union,
    Tuple,
    /// A reference to an enum declared in the same file.
    EnumRef(String),
    /// `object` keyword or an object literal type.
    Object,
    Void,
    /// Anything else, carrying the syntax kind (or keyword) it was built from.
    Other(String),
}

impl TypeDescriptor {
    /// Classify a type node.
    pub fn from_node<D: Doc>(node: &Node<D>, enums: &EnumIndex) -> Self {
        match node.kind().as_ref() {
            "predefined_type" => Self::from_keyword(node.text().trim()),
            "type_identifier" | "nested_type_identifier" | "identifier" => {
                Self::reference(node.text().to_string(), Vec::new(), enums)
            }
            "generic_type" => {
                let name = node
                    .field("name")
                    .map(|n| n.text().to_string())
                    .unwrap_or_default();
                let args = node
                    .field("type_arguments")
                    .map(|list| {
                        named_children(&list)
                            .iter()
                            .map(|arg| Self::from_node(arg, enums))
                            .collect()
                    })
                    .unwrap_or_default();
                Self::reference(name, args, enums)
            }
            "array_type" => named_children(node).first().map_or_else(
                || Self::Other("array_type".to_string()),
                |element| Self::Array(Box::new(Self::from_node(element, enums))),
            ),
            "union_type" => Self::Union,
            "tuple_type" => Self::Tuple,
            "object_type" => Self::Object,
            "existential_type" => Self::Primitive(ValueType::Any),
            other => Self::Other(other.to_string()),
        }
    }

    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "number" => Self::Primitive(ValueType::Number),
            "string" => Self::Primitive(ValueType::String),
            "boolean" => Self::Primitive(ValueType::Boolean),
            "any" => Self::Primitive(ValueType::Any),
            "object" => Self::Object,
            "void" => Self::Void,
            other => Self::Other(other.to_string()),
        }
    }

    fn reference(name: String, mut args: Vec<Self>, enums: &EnumIndex) -> Self {
        if enums.contains(&name) {
            return Self::EnumRef(name);
        }
        if name == "Promise" && args.len() == 1 {
            return Self::Deferred(Box::new(args.remove(0)));
        }
        Self::Generic { name, args }
    }

    /// Coarse syntactic kind, used to compare a declared type with its
    /// documented counterpart.
    #[must_use]
    pub fn kind_label(&self) -> &str {
        match self {
            Self::Primitive(value_type) => value_type.as_str(),
            Self::Array(_) => "array",
            Self::Generic { .. } | Self::Deferred(_) | Self::EnumRef(_) => "reference",
            Self::Union => "union",
            Self::Tuple => "tuple",
            Self::Object => "object",
            Self::Void => "void",
            Self::Other(kind) => kind,
        }
    }

    /// Referenced type name without arguments, for named references.
    #[must_use]
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            Self::Generic { name, .. } | Self::EnumRef(name) => Some(name),
            Self::Deferred(_) => Some("Promise"),
            _ => None,
        }
    }

    /// Type arguments of a named reference.
    #[must_use]
    pub fn type_arguments(&self) -> &[Self] {
        match self {
            Self::Generic { args, .. } => args,
            Self::Deferred(inner) => std::slice::from_ref(inner.as_ref()),
            _ => &[],
        }
    }
}

/// A classified type plus where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub descriptor: TypeDescriptor,
    pub position: SourcePosition,
}

impl TypeRef {
    pub fn from_node<D: Doc>(node: &Node<D>, enums: &EnumIndex) -> Self {
        Self {
            descriptor: TypeDescriptor::from_node(node, enums),
            position: start_position(node),
        }
    }

    /// Classify a `JSDoc` type expression (the text between the braces).
    ///
    /// The expression is parsed as the right-hand side of a type alias.
    /// Diagnostics about it are reported at `position`, the tag's location.
    #[must_use]
    pub fn from_doc(expression: &str, position: SourcePosition, enums: &EnumIndex) -> Self {
        let expression = expression.trim();
        let descriptor = match expression {
            "*" | "?" => TypeDescriptor::Primitive(ValueType::Any),
            _ => {
                let source = format!("type __DocType = {expression};");
                let tree = parse_source(&source, SupportLang::TypeScript);
                let value = tree
                    .root()
                    .children()
                    .find(|child| child.kind().as_ref() == "type_alias_declaration")
                    .and_then(|alias| alias.field("value"));
                value.map_or_else(
                    || TypeDescriptor::Other(expression.to_string()),
                    |value| TypeDescriptor::from_node(&value, enums),
                )
            }
        };
        Self {
            descriptor,
            position,
        }
    }

    #[must_use]
    pub fn kind_label(&self) -> &str {
        self.descriptor.kind_label()
    }
}
