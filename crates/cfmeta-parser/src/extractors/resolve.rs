//! Type resolution: [`TypeDescriptor`] to host value type and array depth.

use cfmeta_core::{Dimensionality, ResultMetadata, SourcePosition, ValueType};

use super::diagnostics::DiagnosticLog;
use super::types::{TypeDescriptor, TypeRef};

const ARRAY: &str = "Array";

pub(crate) const STREAMING_HANDLER_ARGUMENTS: &str = "The 'CustomFunctions.StreamingHandler' needs to be passed in a single result type (e.g., 'CustomFunctions.StreamingHandler < number >') :";
pub(crate) const STREAMING_RETURNS_VOID: &str = "A streaming function should return 'void'. Use CustomFunctions.StreamingHandler.setResult() to set results.";
pub(crate) const NO_TYPE_MAPPING: &str = "Type doesn't match mappings";

/// Host value type plus how deeply the source type nested arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ResolvedType {
    pub value_type: ValueType,
    pub depth: usize,
}

impl ResolvedType {
    const fn scalar(value_type: ValueType) -> Self {
        Self {
            value_type,
            depth: 0,
        }
    }

    pub const fn dimensionality(self) -> Dimensionality {
        Dimensionality::from_depth(self.depth)
    }

    /// Parameters repeat at array depth 1 and 3 only.
    pub const fn repeating(self) -> bool {
        matches!(self.depth, 1 | 3)
    }

    pub const fn into_result(self) -> ResultMetadata {
        ResultMetadata::new(self.value_type, self.dimensionality())
    }
}

/// Resolve a parameter type. `None` (untyped JavaScript) is `any`.
pub(crate) fn resolve_type(ty: Option<&TypeRef>, log: &mut DiagnosticLog) -> ResolvedType {
    ty.map_or_else(ResolvedType::default, |ty| {
        resolve_descriptor(&ty.descriptor, ty.position, log)
    })
}

/// Resolve a return type, unwrapping one level of `Promise<T>`.
pub(crate) fn resolve_return(ty: &TypeRef, log: &mut DiagnosticLog) -> ResolvedType {
    match &ty.descriptor {
        TypeDescriptor::Deferred(inner) => resolve_descriptor(inner, ty.position, log),
        descriptor => resolve_descriptor(descriptor, ty.position, log),
    }
}

fn resolve_descriptor(
    descriptor: &TypeDescriptor,
    position: SourcePosition,
    log: &mut DiagnosticLog,
) -> ResolvedType {
    match descriptor {
        TypeDescriptor::Primitive(value_type) => ResolvedType::scalar(*value_type),
        TypeDescriptor::Union
        | TypeDescriptor::Tuple
        | TypeDescriptor::Object
        | TypeDescriptor::Void
        | TypeDescriptor::EnumRef(_) => ResolvedType::default(),
        TypeDescriptor::Array(_) => unwrap_array(descriptor, position, log),
        TypeDescriptor::Generic { name, .. } if name == ARRAY => {
            unwrap_array(descriptor, position, log)
        }
        TypeDescriptor::Generic { name, .. } => {
            log.push(format!("Invalid type: {name}"), position);
            ResolvedType::default()
        }
        TypeDescriptor::Deferred(_) => {
            log.push("Invalid type: Promise", position);
            ResolvedType::default()
        }
        TypeDescriptor::Other(_) => {
            log.push(NO_TYPE_MAPPING, position);
            ResolvedType::default()
        }
    }
}

/// Peel `T[]` and `Array<T>` layers, counting them. The innermost element
/// supplies the value type and must be a scalar form.
fn unwrap_array(
    descriptor: &TypeDescriptor,
    position: SourcePosition,
    log: &mut DiagnosticLog,
) -> ResolvedType {
    let mut depth = 0;
    let mut current = descriptor;
    loop {
        match current {
            TypeDescriptor::Array(element) => current = element.as_ref(),
            TypeDescriptor::Generic { name, args } if name == ARRAY && args.len() == 1 => {
                current = &args[0];
            }
            _ => break,
        }
        depth += 1;
    }

    let value_type = match current {
        TypeDescriptor::Primitive(value_type) => *value_type,
        TypeDescriptor::Union
        | TypeDescriptor::Tuple
        | TypeDescriptor::Object
        | TypeDescriptor::Void
        | TypeDescriptor::EnumRef(_) => ValueType::Any,
        // `Array` without a single argument carries no element type.
        TypeDescriptor::Generic { name, .. } if name == ARRAY => ValueType::Any,
        _ => {
            log.push(NO_TYPE_MAPPING, position);
            ValueType::Any
        }
    };
    ResolvedType { value_type, depth }
}

/// Inputs to result resolution for one function.
pub(crate) struct ResultInputs<'a> {
    pub function_name: &'a str,
    pub declared_return: Option<&'a TypeRef>,
    pub documented_return: Option<&'a TypeRef>,
    /// The type that made the last parameter a streaming handler.
    pub streaming_type: Option<&'a TypeRef>,
    pub last_parameter: Option<SourcePosition>,
}

/// Resolved result, and whether a streaming-contract violation forced
/// the default shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResultOutcome {
    pub metadata: ResultMetadata,
    pub forced: bool,
}

impl ResultOutcome {
    /// The serialized form: omitted when all-default unless forced.
    pub const fn into_metadata(self) -> Option<ResultMetadata> {
        if self.forced || !self.metadata.is_default() {
            Some(self.metadata)
        } else {
            None
        }
    }
}

/// Determine a function's result descriptor.
///
/// Streaming functions take the handler's single type argument and must
/// declare `void`; either violation reports once and forces the default.
/// Otherwise the declared return type is used. A documented `@returns`
/// type overrides both.
pub(crate) fn resolve_result(inputs: &ResultInputs<'_>, log: &mut DiagnosticLog) -> ResultOutcome {
    let mut resolved = ResolvedType::default();

    if let Some(handler) = inputs.streaming_type {
        let position = inputs.last_parameter.unwrap_or(handler.position);
        let args = handler.descriptor.type_arguments();
        if args.len() != 1 {
            log.push(STREAMING_HANDLER_ARGUMENTS, position);
            return ResultOutcome {
                metadata: ResultMetadata::default(),
                forced: true,
            };
        }
        if let Some(declared) = inputs.declared_return
            && declared.descriptor != TypeDescriptor::Void
        {
            log.push(STREAMING_RETURNS_VOID, position);
            return ResultOutcome {
                metadata: ResultMetadata::default(),
                forced: true,
            };
        }
        resolved = resolve_descriptor(&args[0], handler.position, log);
    } else if let Some(declared) = inputs.declared_return {
        resolved = resolve_return(declared, log);
    }

    if let Some(documented) = inputs.documented_return {
        if let Some(declared) = inputs.declared_return
            && declared.kind_label() != documented.kind_label()
        {
            log.push(
                format!(
                    "Type {{{}:{}}} doesn't match for return type : {}",
                    declared.kind_label(),
                    documented.kind_label(),
                    inputs.function_name
                ),
                documented.position,
            );
        }
        resolved = resolve_return(documented, log);
    }

    ResultOutcome {
        metadata: resolved.into_result(),
        forced: false,
    }
}
