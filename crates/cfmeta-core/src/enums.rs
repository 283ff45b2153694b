//! Value-model enums for custom function descriptors.
//!
//! All enums serialize in lowercase, matching the host's registration payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ValueType
// ---------------------------------------------------------------------------

/// The closed set of value types the host understands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Number,
    String,
    Boolean,
    #[default]
    Any,
}

impl ValueType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Any => "any",
        }
    }

    /// `any` is the implicit default and is left out of result descriptors.
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dimensionality
// ---------------------------------------------------------------------------

/// Whether a value is a single cell or a matrix of cells.
///
/// Scalar is implicit: only `matrix` ever appears in serialized output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Dimensionality {
    #[default]
    Scalar,
    Matrix,
}

impl Dimensionality {
    /// Map an array nesting depth onto the host's binary dimensionality.
    #[must_use]
    pub const fn from_depth(depth: usize) -> Self {
        if depth > 1 { Self::Matrix } else { Self::Scalar }
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FunctionStatus
// ---------------------------------------------------------------------------

/// Registration readiness of one parsed function.
///
/// ```text
/// good  → error   (module compilation failed)
/// error → (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FunctionStatus {
    Good,
    Error,
}

impl FunctionStatus {
    /// Status implied by a function's diagnostics.
    #[must_use]
    pub const fn from_error_count(count: usize) -> Self {
        if count == 0 { Self::Good } else { Self::Error }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for FunctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
