//! Merges extracted pieces into one [`FunctionMetadata`].

use cfmeta_core::{FunctionMetadata, OptionsMetadata, ParameterMetadata, SourcePosition};

use super::diagnostics::DiagnosticLog;
use super::jsdoc::{
    CANCELABLE, CommentBlock, HELP_URL, REQUIRES_ADDRESS, REQUIRES_PARAMETER_ADDRESSES,
    STREAMING, VOLATILE,
};
use super::params::ParameterRole;
use super::resolve::ResultOutcome;

/// Everything gathered for one tagged function.
pub(crate) struct FunctionParts<'a> {
    pub id: String,
    pub name: String,
    pub doc: &'a CommentBlock,
    pub parameters: Vec<ParameterMetadata>,
    pub result: ResultOutcome,
    pub options: OptionsMetadata,
}

pub(crate) fn assemble(parts: FunctionParts<'_>) -> FunctionMetadata {
    FunctionMetadata {
        id: parts.id,
        name: parts.name,
        description: description(parts.doc),
        help_url: non_empty(parts.doc.tag_text(HELP_URL)),
        parameters: parts.parameters,
        result: parts.result.into_metadata(),
        options: parts.options.non_empty(),
    }
}

/// Leading doc text, else the `@returns` text.
fn description(doc: &CommentBlock) -> Option<String> {
    non_empty(&doc.description)
        .or_else(|| doc.returns().and_then(|tag| non_empty(&tag.text)))
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Where address-option diagnostics point.
pub(crate) struct OptionPositions {
    /// Start of the declaration.
    pub function: SourcePosition,
    /// End of the parameter list.
    pub parameters_end: SourcePosition,
}

/// Option flags from tags and the last parameter's role.
///
/// Address options need an invocation-style last parameter and are
/// incompatible with a streaming signature.
pub(crate) fn resolve_options(
    doc: &CommentBlock,
    role: ParameterRole,
    positions: &OptionPositions,
    log: &mut DiagnosticLog,
) -> OptionsMetadata {
    let options = OptionsMetadata {
        cancelable: role == ParameterRole::Cancelable || doc.has_tag(CANCELABLE),
        requires_address: doc.has_tag(REQUIRES_ADDRESS),
        stream: role == ParameterRole::Streaming || doc.has_tag(STREAMING),
        volatile: doc.has_tag(VOLATILE),
        requires_parameter_addresses: doc.has_tag(REQUIRES_PARAMETER_ADDRESSES),
    };

    if options.requires_address || options.requires_parameter_addresses {
        let tag = if options.requires_address {
            "@requiresAddress"
        } else {
            "@requiresParameterAddresses"
        };
        if !role.is_special() {
            log.push(
                format!(
                    "Since {tag} is present, the last function parameter should be of type CustomFunctions.Invocation :"
                ),
                positions.parameters_end,
            );
        }
        if role == ParameterRole::Streaming {
            log.push(format!("{tag} cannot be used with @streaming."), positions.function);
        }
    }
    options
}
