//! Registration preparation: status-carrying parse results, module
//! compilation and the host payload.

use cfmeta_core::{Diagnostic, FunctionParseResult, RegistrationDocument};

use crate::error::ParserError;
use crate::extractors::parse_tree;

/// Prepended to every function's errors when module compilation fails.
pub const SNIPPET_COMPILER_ERROR: &str = "Snippet compiler error";

/// Turns function source into the module code handed to the host.
pub trait ModuleCompiler {
    /// # Errors
    /// Returns `ParserError::CompilationFailed` when `source` cannot be compiled.
    fn compile(&self, source: &str) -> Result<String, ParserError>;
}

/// Hands the source through unchanged, for sources that are already
/// plain JavaScript.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughCompiler;

impl ModuleCompiler for PassthroughCompiler {
    fn compile(&self, source: &str) -> Result<String, ParserError> {
        Ok(source.to_string())
    }
}

/// How the host registers functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStrategy {
    /// The host supports custom functions requirement set 1.6.
    Direct,
    /// Older hosts register through a workbook context.
    Legacy,
}

impl RegistrationStrategy {
    #[must_use]
    pub const fn for_capability(supports_direct: bool) -> Self {
        if supports_direct {
            Self::Direct
        } else {
            Self::Legacy
        }
    }
}

/// Ties a registered id and name back to the callable in the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBinding {
    pub id: String,
    pub name: String,
    pub runtime_function_name: String,
}

/// Everything needed to register one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationBundle {
    pub results: Vec<FunctionParseResult>,
    /// Compiled module code; `None` when compilation was skipped or failed.
    pub code: Option<String>,
}

impl RegistrationBundle {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.results.iter().any(|result| !result.is_good())
    }

    /// Bindings for functions that will be registered.
    #[must_use]
    pub fn bindings(&self) -> Vec<FunctionBinding> {
        self.results
            .iter()
            .filter(|result| result.is_good())
            .map(|result| FunctionBinding {
                id: result.metadata.id.clone(),
                name: result.metadata.name.clone(),
                runtime_function_name: result.runtime_function_name.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn document(&self, include_failed: bool) -> RegistrationDocument {
        RegistrationDocument::from_results(&self.results, include_failed)
    }
}

/// Extract metadata and split it into per-function results with a status.
#[must_use]
pub fn parse_metadata(source: &str, label: &str) -> Vec<FunctionParseResult> {
    parse_tree(source, label).into_parse_results()
}

/// Extract metadata and, when every function is good, compile the module.
///
/// A compilation failure fails every function with
/// [`SNIPPET_COMPILER_ERROR`] placed ahead of its other errors.
pub fn prepare_registration<C: ModuleCompiler + ?Sized>(
    source: &str,
    label: &str,
    compiler: &C,
) -> RegistrationBundle {
    let mut results = parse_metadata(source, label);
    let mut code = None;

    if results.iter().all(FunctionParseResult::is_good) {
        match compiler.compile(source) {
            Ok(compiled) => code = Some(compiled),
            Err(error) => {
                tracing::warn!(%error, label, "module compilation failed; failing all functions");
                for result in &mut results {
                    result.mark_failed(Diagnostic::unlocated(SNIPPET_COMPILER_ERROR));
                }
            }
        }
    } else {
        tracing::debug!(label, "skipping module compilation: functions have errors");
    }

    RegistrationBundle { results, code }
}
