use std::process::ExitCode;

use cfmeta_config::OutputConfig;
use cfmeta_schema::{SchemaError, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `cfmeta schema`.
///
/// Runs before configuration is loaded, so output uses the default indent.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let registry = SchemaRegistry::new()?;
    let indent = OutputConfig::default().indent;

    match args.name.as_deref() {
        Some(name) if !args.list => {
            let schema = registry
                .get(name)
                .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
            output(schema, flags.format, indent)?;
        }
        _ => output(&registry.list(), flags.format, indent)?,
    }
    Ok(ExitCode::SUCCESS)
}
