//! Top-level declaration walk and per-function extraction.

use ast_grep_core::{Doc, Node};
use cfmeta_core::{Association, FunctionExtras, ParseTreeResult, SourcePosition};

use super::assemble::{FunctionParts, OptionPositions, assemble, resolve_options};
use super::diagnostics::DiagnosticLog;
use super::enums::EnumIndex;
use super::helpers::{annotated_type, end_position, start_position};
use super::jsdoc::{CUSTOM_FUNCTION, CommentBlock, leading_comment_block};
use super::params::{ParameterRole, classify_last, extract_parameter, parameters_of};
use super::resolve::{ResultInputs, resolve_result};
use super::types::TypeRef;
use super::validate::{UniqueNames, normalize_id, validate_id, validate_name};

/// Overload heads (`function_signature`) are candidates in their own right.
const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_signature",
];

/// A candidate function and the node its comments attach to.
pub(crate) struct Declaration<'r, D: Doc> {
    pub function: Node<'r, D>,
    /// The wrapping `export` statement, or the function itself.
    pub anchor: Node<'r, D>,
}

/// Function declarations that are direct children of the program,
/// bare or wrapped in `export`.
pub(crate) fn top_level_declarations<'r, D: Doc>(root: &Node<'r, D>) -> Vec<Declaration<'r, D>> {
    let mut declarations = Vec::new();
    for child in root.children() {
        if is_function(&child) {
            declarations.push(Declaration {
                function: child.clone(),
                anchor: child,
            });
            continue;
        }
        let exported = (child.kind().as_ref() == "export_statement")
            .then(|| child.field("declaration"))
            .flatten()
            .filter(is_function);
        if let Some(function) = exported {
            declarations.push(Declaration {
                function,
                anchor: child,
            });
        }
    }
    declarations
}

fn is_function<D: Doc>(node: &Node<'_, D>) -> bool {
    FUNCTION_KINDS.contains(&node.kind().as_ref())
}

/// Mutable state for one extraction run.
pub(crate) struct ParserState {
    enums: EnumIndex,
    source_names: UniqueNames,
    ids: UniqueNames,
    names: UniqueNames,
    result: ParseTreeResult,
}

impl ParserState {
    pub fn new(enums: EnumIndex) -> Self {
        Self {
            enums,
            source_names: UniqueNames::default(),
            ids: UniqueNames::default(),
            names: UniqueNames::default(),
            result: ParseTreeResult::default(),
        }
    }

    pub fn finish(self) -> ParseTreeResult {
        self.result
    }

    pub fn visit<D: Doc>(&mut self, declaration: &Declaration<'_, D>) {
        let function_name = declaration
            .function
            .field("name")
            .map(|name| name.text().to_string())
            .unwrap_or_default();
        let position = start_position(&declaration.anchor);

        let mut log = DiagnosticLog::default();
        if !self.source_names.insert(&function_name) {
            log.push(format!("Duplicate function name: {function_name}"), position);
        }

        let Some(doc) =
            leading_comment_block(&declaration.anchor).filter(|doc| doc.has_tag(CUSTOM_FUNCTION))
        else {
            tracing::trace!(function = %function_name, "skipping declaration without @customfunction");
            return;
        };

        self.extract(declaration, &function_name, &doc, position, log);
    }

    fn extract<D: Doc>(
        &mut self,
        declaration: &Declaration<'_, D>,
        function_name: &str,
        doc: &CommentBlock,
        position: SourcePosition,
        mut log: DiagnosticLog,
    ) {
        let function = &declaration.function;
        let params = parameters_of(function, &self.enums);
        let classification = classify_last(params.last(), Some(doc), &self.enums);
        let visible = if classification.role.is_special() {
            &params[..params.len() - 1]
        } else {
            &params[..]
        };
        let parameters: Vec<_> = visible
            .iter()
            .map(|param| extract_parameter(param, Some(doc), &self.enums, &mut log))
            .collect();

        let declared_return = function
            .field("return_type")
            .and_then(annotated_type)
            .map(|ty| TypeRef::from_node(&ty, &self.enums));
        let documented_return = doc.returns().and_then(|tag| {
            tag.type_expression
                .as_deref()
                .map(|expression| TypeRef::from_doc(expression, tag.position, &self.enums))
        });
        let streaming_type = if classification.role == ParameterRole::Streaming {
            classification.role_type.as_ref()
        } else {
            None
        };
        let result = resolve_result(
            &ResultInputs {
                function_name,
                declared_return: declared_return.as_ref(),
                documented_return: documented_return.as_ref(),
                streaming_type,
                last_parameter: params.last().map(|param| param.position),
            },
            &mut log,
        );

        let parameters_end = function
            .field("parameters")
            .map_or(position, |list| end_position(&list));
        let options = resolve_options(
            doc,
            classification.role,
            &OptionPositions {
                function: position,
                parameters_end,
            },
            &mut log,
        );

        let (id_token, name_token) = doc.id_and_name();
        let id = normalize_id(id_token.unwrap_or(function_name));
        let name = name_token.map_or_else(|| id.clone(), str::to_string);
        validate_id(&id, position, &mut log);
        validate_name(&name, position, &mut log);
        if !self.names.insert(&name) {
            log.push(
                format!("@customfunction tag specifies a duplicate name: {name}"),
                position,
            );
        }
        if !self.ids.insert(&id) {
            log.push(
                format!("@customfunction tag specifies a duplicate id: {id}"),
                position,
            );
        }

        tracing::debug!(
            function = %function_name,
            %id,
            diagnostics = log.len(),
            "extracted custom function"
        );

        self.result.associate.push(Association {
            function_name: function_name.to_string(),
            id: id.clone(),
        });
        self.result.extras.push(FunctionExtras {
            errors: log.into_vec(),
            runtime_function_name: function_name.to_string(),
        });
        self.result.functions.push(assemble(FunctionParts {
            id,
            name,
            doc,
            parameters,
            result,
            options,
        }));
    }
}
