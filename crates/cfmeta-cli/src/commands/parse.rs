use std::process::ExitCode;

use cfmeta_config::CfmetaConfig;
use cfmeta_parser::parse_tree;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::commands::read_source;
use crate::output::output;

/// Handle `cfmeta parse`.
pub fn handle(
    args: &ParseArgs,
    config: &CfmetaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    let (source, label) = read_source(&args.file)?;
    let result = parse_tree(&source, &label);
    output(&result, flags.format, config.output.indent)?;
    Ok(ExitCode::SUCCESS)
}
