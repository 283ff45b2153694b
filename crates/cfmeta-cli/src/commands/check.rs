use std::process::ExitCode;

use cfmeta_config::CfmetaConfig;
use cfmeta_core::ParseTreeResult;
use cfmeta_parser::parse_tree;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::read_source;

/// Handle `cfmeta check`.
///
/// Prints one `label: function: diagnostic` line per diagnostic. Every
/// file is read before anything is reported, so an unreadable file fails
/// the whole run.
pub fn handle(
    args: &CheckArgs,
    config: &CfmetaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let (source, label) = read_source(path)?;
        let result = parse_tree(&source, &label);
        reports.push((label, result));
    }

    let lines = report_lines(&reports);
    for line in &lines {
        println!("{line}");
    }

    if !flags.quiet {
        let functions: usize = reports.iter().map(|(_, r)| r.functions.len()).sum();
        eprintln!(
            "checked {} file(s), {functions} function(s), {} diagnostic(s)",
            reports.len(),
            lines.len()
        );
    }

    Ok(exit_code(lines.len(), config.check.fail_on_diagnostics))
}

fn report_lines(reports: &[(String, ParseTreeResult)]) -> Vec<String> {
    reports
        .iter()
        .flat_map(|(label, result)| {
            result
                .diagnostics()
                .map(move |(function, diagnostic)| format!("{label}: {function}: {diagnostic}"))
        })
        .collect()
}

const fn exit_code(diagnostics: usize, fail_on_diagnostics: bool) -> ExitCode {
    if diagnostics > 0 && fail_on_diagnostics {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
