//! Function descriptors in the shape the host registration payload expects.
//!
//! Field omission follows the host's conventions: defaults (`any`, scalar,
//! `false`, empty text) are never written, so a minimal function serializes
//! as just `{id, name, parameters}`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Dimensionality, ValueType};

/// One custom function, as registered with the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionMetadata {
    /// Upper-cased registration id.
    pub id: String,
    /// Display name shown to users.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,
    pub parameters: Vec<ParameterMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsMetadata>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Dimensionality::is_scalar")]
    pub dimensionality: Dimensionality,
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub repeating: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Return value shape. The all-default value serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "ValueType::is_any"
    )]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Dimensionality::is_scalar")]
    pub dimensionality: Dimensionality,
}

impl ResultMetadata {
    #[must_use]
    pub const fn new(value_type: ValueType, dimensionality: Dimensionality) -> Self {
        Self {
            value_type,
            dimensionality,
        }
    }

    /// `any` and scalar: carries no information for the host.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.value_type.is_any() && self.dimensionality.is_scalar()
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionsMetadata {
    #[serde(default, skip_serializing_if = "is_false")]
    pub cancelable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub requires_address: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub stream: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub volatile: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub requires_parameter_addresses: bool,
}

impl OptionsMetadata {
    /// True when no flag is set and the whole object should be omitted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.cancelable
            || self.requires_address
            || self.stream
            || self.volatile
            || self.requires_parameter_addresses)
    }

    /// `Some(self)` unless every flag is false.
    #[must_use]
    pub const fn non_empty(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}
