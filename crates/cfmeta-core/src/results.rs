//! Parse bundles and the host registration document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;
use crate::enums::FunctionStatus;
use crate::metadata::FunctionMetadata;

/// Maps a source-level function name to its registered id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub function_name: String,
    pub id: String,
}

/// Per-function side data used to correlate failures with callable objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionExtras {
    pub errors: Vec<Diagnostic>,
    pub runtime_function_name: String,
}

/// Everything one extraction run produces.
///
/// `associate`, `extras` and `functions` are parallel: index `i` of each
/// describes the `i`-th tagged function in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ParseTreeResult {
    pub associate: Vec<Association>,
    pub extras: Vec<FunctionExtras>,
    pub functions: Vec<FunctionMetadata>,
}

impl ParseTreeResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// True if any function carries at least one diagnostic.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.extras.iter().any(|extra| !extra.errors.is_empty())
    }

    /// All diagnostics paired with the source-level function they belong to.
    pub fn diagnostics(&self) -> impl Iterator<Item = (&str, &Diagnostic)> {
        self.extras.iter().flat_map(|extra| {
            extra
                .errors
                .iter()
                .map(move |error| (extra.runtime_function_name.as_str(), error))
        })
    }

    /// Split the bundle into one status-carrying record per function.
    #[must_use]
    pub fn into_parse_results(self) -> Vec<FunctionParseResult> {
        self.functions
            .into_iter()
            .zip(self.extras)
            .map(|(metadata, extra)| FunctionParseResult {
                status: FunctionStatus::from_error_count(extra.errors.len()),
                metadata,
                runtime_function_name: extra.runtime_function_name,
                errors: extra.errors,
            })
            .collect()
    }
}

/// One function with its registration readiness.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParseResult {
    pub metadata: FunctionMetadata,
    pub runtime_function_name: String,
    pub status: FunctionStatus,
    pub errors: Vec<Diagnostic>,
}

impl FunctionParseResult {
    #[must_use]
    pub const fn is_good(&self) -> bool {
        matches!(self.status, FunctionStatus::Good)
    }

    /// Fail the function with `diagnostic` placed ahead of existing errors.
    pub fn mark_failed(&mut self, diagnostic: Diagnostic) {
        self.status = FunctionStatus::Error;
        self.errors.insert(0, diagnostic);
    }
}

/// The `{"functions": [...]}` document handed to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegistrationDocument {
    pub functions: Vec<FunctionMetadata>,
}

impl RegistrationDocument {
    /// Collect functions for registration. Failed ones are skipped unless
    /// `include_failed` is set.
    #[must_use]
    pub fn from_results(results: &[FunctionParseResult], include_failed: bool) -> Self {
        let functions = results
            .iter()
            .filter(|result| include_failed || result.is_good())
            .map(|result| result.metadata.clone())
            .collect();
        Self { functions }
    }
}
