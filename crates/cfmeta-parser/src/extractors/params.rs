//! Parameter extraction and last-parameter role classification.

use ast_grep_core::{Doc, Node};
use cfmeta_core::{ParameterMetadata, SourcePosition};

use super::diagnostics::DiagnosticLog;
use super::enums::EnumIndex;
use super::helpers::{annotated_type, named_children, start_position};
use super::jsdoc::CommentBlock;
use super::resolve::resolve_type;
use super::types::TypeRef;

/// The calling-convention role of a function's last parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterRole {
    /// Pushes a stream of results to the host.
    Streaming,
    /// Receives cancellation notifications.
    Cancelable,
    /// Receives the plain invocation context (caller address etc.).
    Context,
    Ordinary,
}

impl ParameterRole {
    /// Role implied by a referenced type name, ignoring case.
    #[must_use]
    pub fn from_type_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "customfunctions.streaminginvocation"
            | "customfunctions.streaminghandler"
            | "istreamingcustomfunctionhandler" => Self::Streaming,
            "customfunctions.cancelablehandler" | "customfunctions.cancelableinvocation" => {
                Self::Cancelable
            }
            "customfunctions.invocation" => Self::Context,
            _ => Self::Ordinary,
        }
    }

    fn of(ty: &TypeRef) -> Self {
        ty.descriptor
            .reference_name()
            .map_or(Self::Ordinary, Self::from_type_name)
    }

    /// Special roles are supplied by the host and hidden from the descriptor.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Self::Ordinary)
    }
}

/// One parameter as written in the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParameterSyntax {
    pub name: String,
    pub declared: Option<TypeRef>,
    /// `?`, a default value, or a rest `...` makes a parameter optional.
    pub optional: bool,
    pub position: SourcePosition,
}

impl ParameterSyntax {
    pub fn from_node<D: Doc>(node: &Node<D>, enums: &EnumIndex) -> Option<Self> {
        let kind = node.kind();
        let (name, declared, optional) = match kind.as_ref() {
            "required_parameter" | "optional_parameter" => {
                let pattern = node.field("pattern")?;
                let (name, rest) = pattern_name(&pattern);
                let declared = node
                    .field("type")
                    .and_then(annotated_type)
                    .map(|ty| TypeRef::from_node(&ty, enums));
                let optional = kind.as_ref() == "optional_parameter"
                    || node.field("value").is_some()
                    || rest;
                (name, declared, optional)
            }
            "rest_parameter" => {
                let children = named_children(node);
                let name = children
                    .iter()
                    .find(|c| c.kind().as_ref() != "type_annotation")
                    .map(|c| c.text().to_string())?;
                let declared = children
                    .into_iter()
                    .find(|c| c.kind().as_ref() == "type_annotation")
                    .and_then(annotated_type)
                    .map(|ty| TypeRef::from_node(&ty, enums));
                (name, declared, true)
            }
            "assignment_pattern" => {
                let (name, _) = pattern_name(&node.field("left")?);
                (name, None, true)
            }
            "identifier" | "rest_pattern" | "object_pattern" | "array_pattern" => {
                let (name, rest) = pattern_name(node);
                (name, None, rest)
            }
            _ => return None,
        };
        Some(Self {
            name,
            declared,
            optional,
            position: start_position(node),
        })
    }

    /// The `{type}` written on this parameter's `@param` tag.
    fn documented_type(&self, doc: Option<&CommentBlock>, enums: &EnumIndex) -> Option<TypeRef> {
        let tag = doc?.parameter(&self.name)?;
        let expression = tag.type_expression.as_deref()?;
        Some(TypeRef::from_doc(expression, tag.position, enums))
    }
}

/// Parameters of a function declaration in signature order.
pub(crate) fn parameters_of<D: Doc>(function: &Node<D>, enums: &EnumIndex) -> Vec<ParameterSyntax> {
    function
        .field("parameters")
        .map(|list| {
            named_children(&list)
                .iter()
                .filter_map(|param| ParameterSyntax::from_node(param, enums))
                .collect()
        })
        .unwrap_or_default()
}

fn pattern_name<D: Doc>(pattern: &Node<D>) -> (String, bool) {
    if pattern.kind().as_ref() == "rest_pattern" {
        let name = named_children(pattern)
            .first()
            .map_or_else(
                || pattern.text().trim_start_matches("...").to_string(),
                |inner| inner.text().to_string(),
            );
        (name, true)
    } else {
        (pattern.text().to_string(), false)
    }
}

/// Role of the last parameter and the type that decided it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classification {
    pub role: ParameterRole,
    pub role_type: Option<TypeRef>,
}

impl Classification {
    const fn ordinary() -> Self {
        Self {
            role: ParameterRole::Ordinary,
            role_type: None,
        }
    }
}

/// Classify the last parameter. A role named by the `@param {type}` wins
/// over the declared annotation, but the declared annotation, when present,
/// is the type whose arguments describe the result.
pub(crate) fn classify_last(
    last: Option<&ParameterSyntax>,
    doc: Option<&CommentBlock>,
    enums: &EnumIndex,
) -> Classification {
    let Some(last) = last else {
        return Classification::ordinary();
    };
    let documented = last.documented_type(doc, enums);
    let role = [documented.as_ref(), last.declared.as_ref()]
        .into_iter()
        .flatten()
        .map(ParameterRole::of)
        .find(|role| role.is_special());

    match role {
        Some(role) => Classification {
            role,
            role_type: last.declared.clone().or(documented),
        },
        None => Classification::ordinary(),
    }
}

/// Build the descriptor for one visible parameter.
///
/// The declared type is authoritative; the documented type only fills in
/// for untyped parameters. Disagreeing kinds are reported.
pub(crate) fn extract_parameter(
    param: &ParameterSyntax,
    doc: Option<&CommentBlock>,
    enums: &EnumIndex,
    log: &mut DiagnosticLog,
) -> ParameterMetadata {
    let tag = doc.and_then(|doc| doc.parameter(&param.name));
    let documented = param.documented_type(doc, enums);

    if let (Some(declared), Some(documented)) = (&param.declared, &documented)
        && declared.kind_label() != documented.kind_label()
    {
        log.push(
            format!(
                "Type {{{}:{}}} doesn't match for parameter : {}",
                documented.kind_label(),
                declared.kind_label(),
                param.name
            ),
            param.position,
        );
    }

    let resolved = resolve_type(param.declared.as_ref().or(documented.as_ref()), log);
    let bracketed = tag
        .and_then(|tag| tag.parameter.as_ref())
        .is_some_and(|name| name.bracketed);

    ParameterMetadata {
        name: param.name.clone(),
        value_type: resolved.value_type,
        dimensionality: resolved.dimensionality(),
        optional: param.optional || bracketed,
        repeating: resolved.repeating(),
        description: tag
            .map(|tag| tag.text.clone())
            .filter(|text| !text.is_empty()),
    }
}
