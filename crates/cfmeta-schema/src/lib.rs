//! # cfmeta-schema
//!
//! JSON Schemas for everything cfmeta emits.
//!
//! - [`SchemaRegistry`]: schemas generated from the `cfmeta-core` output
//!   types, looked up by name
//! - Validation of produced documents before they leave the tool
//!   (`cfmeta generate`) and schema export (`cfmeta schema`)

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
