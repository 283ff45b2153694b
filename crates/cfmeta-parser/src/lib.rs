//! # cfmeta-parser
//!
//! ast-grep-based extraction of Excel custom function metadata from
//! `JSDoc`-annotated TypeScript and JavaScript.
//!
//! - [`parse_tree`]: the extraction engine, a total function of source
//!   text and label producing descriptors plus per-function diagnostics
//! - [`registration`]: status-carrying results, module compilation and
//!   the `{"functions": [...]}` host payload

pub mod error;
pub mod extractors;
pub mod parser;
pub mod registration;

pub use error::ParserError;
pub use extractors::parse_tree;
pub use parser::{build_tree, detect_language, load_source};
pub use registration::{
    ModuleCompiler, PassthroughCompiler, RegistrationBundle, RegistrationStrategy, parse_metadata,
    prepare_registration,
};
