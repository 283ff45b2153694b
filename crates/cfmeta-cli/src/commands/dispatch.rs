use std::process::ExitCode;

use cfmeta_config::CfmetaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: &CfmetaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Parse(args) => commands::parse::handle(&args, config, flags),
        Commands::Generate(args) => commands::generate::handle(&args, config, flags),
        Commands::Check(args) => commands::check::handle(&args, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
