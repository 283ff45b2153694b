//! # cfmeta-core
//!
//! Core types and error types for cfmeta.
//!
//! This crate provides the foundational types shared across all cfmeta crates:
//! - Function descriptors emitted for the host (`FunctionMetadata` and friends)
//! - Value-model enums (value type, dimensionality, parse status)
//! - Position-tagged diagnostics
//! - Parse bundles and the `{"functions": [...]}` registration document
//! - Cross-cutting error types

pub mod diagnostic;
pub mod enums;
pub mod errors;
pub mod json;
pub mod metadata;
pub mod results;

pub use diagnostic::{Diagnostic, SourcePosition};
pub use enums::{Dimensionality, FunctionStatus, ValueType};
pub use errors::CoreError;
pub use json::to_json_pretty;
pub use metadata::{FunctionMetadata, OptionsMetadata, ParameterMetadata, ResultMetadata};
pub use results::{
    Association, FunctionExtras, FunctionParseResult, ParseTreeResult, RegistrationDocument,
};
