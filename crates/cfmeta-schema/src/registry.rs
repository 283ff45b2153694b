//! Named JSON Schemas for the cfmeta output types.
//!
//! Schemas are generated once at construction with [`schemars::schema_for!`];
//! validation compiles them with `jsonschema`.

use std::collections::BTreeMap;

use cfmeta_core::{FunctionMetadata, FunctionParseResult, ParseTreeResult, RegistrationDocument};
use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// The `{"functions": [...]}` document handed to the host.
pub const REGISTRATION_DOCUMENT: &str = "registration_document";
/// One function descriptor.
pub const FUNCTION_METADATA: &str = "function_metadata";
/// A function with its registration status and errors.
pub const FUNCTION_PARSE_RESULT: &str = "function_parse_result";
/// The full extraction bundle.
pub const PARSE_TREE_RESULT: &str = "parse_tree_result";

pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert(
            $name,
            serde_json::to_value(schema_for!($ty)).map_err(|e| {
                SchemaError::Generation(format!("{}: {e}", $name))
            })?,
        );
    };
}

impl SchemaRegistry {
    /// Build the registry from the output types.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if a generated schema cannot be
    /// converted to JSON.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = BTreeMap::new();

        register!(schemas, REGISTRATION_DOCUMENT, RegistrationDocument);
        register!(schemas, FUNCTION_METADATA, FunctionMetadata);
        register!(schemas, FUNCTION_PARSE_RESULT, FunctionParseResult);
        register!(schemas, PARSE_TREE_RESULT, ParseTreeResult);

        Ok(Self { schemas })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
