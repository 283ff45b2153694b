use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use cfmeta_config::CfmetaConfig;
use cfmeta_core::RegistrationDocument;
use cfmeta_parser::{PassthroughCompiler, RegistrationBundle, prepare_registration};
use cfmeta_schema::SchemaRegistry;
use cfmeta_schema::registry::REGISTRATION_DOCUMENT;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::read_source;
use crate::output::render;

/// Handle `cfmeta generate`.
pub fn handle(
    args: &GenerateArgs,
    config: &CfmetaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<ExitCode> {
    let (source, label) = read_source(&args.file)?;
    let bundle = prepare_registration(&source, &label, &PassthroughCompiler);
    warn_diagnostics(&bundle, &label);

    let include_failed = args.include_failed || config.output.include_failed;
    let document = validated_document(&bundle, include_failed)?;
    let rendered = render(&document, flags.format, config.output.indent)?;

    match &args.output {
        Some(path) => write_document(path, &rendered)?,
        None => println!("{rendered}"),
    }

    for binding in bundle.bindings() {
        tracing::debug!(
            id = %binding.id,
            name = %binding.name,
            function = %binding.runtime_function_name,
            "registering custom function"
        );
    }
    tracing::info!(
        %label,
        functions = document.functions.len(),
        skipped = bundle.results.len() - document.functions.len(),
        "generated registration document"
    );
    Ok(ExitCode::SUCCESS)
}

fn warn_diagnostics(bundle: &RegistrationBundle, label: &str) {
    for result in &bundle.results {
        for diagnostic in &result.errors {
            tracing::warn!(
                %label,
                function = %result.runtime_function_name,
                %diagnostic,
                "custom function diagnostic"
            );
        }
    }
}

fn validated_document(
    bundle: &RegistrationBundle,
    include_failed: bool,
) -> anyhow::Result<RegistrationDocument> {
    let document = bundle.document(include_failed);
    let registry = SchemaRegistry::new()?;
    registry
        .validate(REGISTRATION_DOCUMENT, &serde_json::to_value(&document)?)
        .context("generated registration document does not match its schema")?;
    Ok(document)
}

fn write_document(path: &Path, rendered: &str) -> anyhow::Result<()> {
    std::fs::write(path, format!("{rendered}\n"))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::cli::OutputFormat;

    const SOURCE: &str = "\
/**
 * Adds two numbers.
 * @customfunction
 */
export function add(first: number, second: number): number {
    return first + second;
}

/** @customfunction 2BAD */
export function bad(): number { return 0; }
";

    fn flags(format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: true,
        }
    }

    fn generate(include_failed: bool, config: &CfmetaConfig, format: OutputFormat) -> String {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("functions.ts");
        let output = dir.path().join("functions.json");
        std::fs::write(&input, SOURCE).unwrap();

        let args = GenerateArgs {
            file: input,
            output: Some(output.clone()),
            include_failed,
        };
        let code = handle(&args, config, &flags(format)).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        std::fs::read_to_string(output).unwrap()
    }

    #[test]
    fn writes_good_functions_only() {
        let written = generate(false, &CfmetaConfig::default(), OutputFormat::Json);
        assert!(written.starts_with("{\n    \"functions\": [\n"));
        assert!(written.ends_with("}\n"));

        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(
            value,
            json!({
                "functions": [{
                    "id": "ADD",
                    "name": "ADD",
                    "description": "Adds two numbers.",
                    "parameters": [
                        { "name": "first", "type": "number" },
                        { "name": "second", "type": "number" }
                    ],
                    "result": { "type": "number" }
                }]
            })
        );
    }

    #[test]
    fn include_failed_from_flag_or_config() {
        let from_flag = generate(true, &CfmetaConfig::default(), OutputFormat::Raw);
        let value: Value = serde_json::from_str(&from_flag).unwrap();
        assert_eq!(value["functions"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["functions"][1]["id"], "2BAD");

        let mut config = CfmetaConfig::default();
        config.output.include_failed = true;
        config.output.indent = 2;
        let from_config = generate(false, &config, OutputFormat::Json);
        assert!(from_config.starts_with("{\n  \"functions\""));
        let value: Value = serde_json::from_str(&from_config).unwrap();
        assert_eq!(value["functions"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn missing_input_reports_path() {
        let args = GenerateArgs {
            file: "/nonexistent/functions.ts".into(),
            output: None,
            include_failed: false,
        };
        let error =
            handle(&args, &CfmetaConfig::default(), &flags(OutputFormat::Json)).unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/functions.ts"));
    }
}
