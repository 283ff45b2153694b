use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the full extraction bundle (functions, associations, diagnostics).
    Parse(ParseArgs),
    /// Emit the registration document for the host.
    Generate(GenerateArgs),
    /// Report diagnostics for one or more source files.
    Check(CheckArgs),
    /// Print a JSON Schema for cfmeta output.
    Schema(SchemaArgs),
}

/// Arguments for `cfmeta parse`.
#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// TypeScript or JavaScript source file.
    pub file: PathBuf,
}

/// Arguments for `cfmeta generate`.
#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// TypeScript or JavaScript source file.
    pub file: PathBuf,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep functions that have diagnostics.
    #[arg(long)]
    pub include_failed: bool,
}

/// Arguments for `cfmeta check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    /// Source files to check.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `cfmeta schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name, e.g. `registration_document`.
    #[arg(required_unless_present = "list")]
    pub name: Option<String>,

    /// List registered schema names.
    #[arg(long, conflicts_with = "name")]
    pub list: bool,
}
