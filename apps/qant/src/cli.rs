//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qant",
    version,
    about = "Validate Quarto document categories against an allow-list",
    long_about = "qant: check that every category declared in document metadata is listed in _qant.yml.\n\nConfiguration precedence: CLI > _qant.yml > defaults.",
    args_conflicts_with_subcommands = true,
    after_help = "Examples:\n  qant\n  qant lint --project-dir site --output json\n  qant lint --inspector \"quarto inspect\" --config conf/categories.yml"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    #[command(flatten)]
    pub lint: LintArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current qant version.")]
    Version,
    /// Validate categories (default when no subcommand is given)
    #[command(
        about = "Validate document categories",
        long_about = "Run the inspection tool and report every category missing from the allow-list. Exits 1 when violations are found.",
        after_help = "Examples:\n  qant lint\n  qant lint --output json"
    )]
    Lint(LintArgs),
}

#[derive(Args, Clone, Default)]
pub struct LintArgs {
    #[arg(long, help = "Project directory (default: nearest ancestor with _qant.yml or _quarto.yml)")]
    pub project_dir: Option<String>,
    #[arg(long, help = "Config file relative to the project root (default: _qant.yml)")]
    pub config: Option<String>,
    #[arg(
        long,
        help = "Inspection command, split on whitespace (default: quarto inspect)",
        long_help = "Inspection command, split on whitespace (default: quarto inspect). Quoting is not interpreted, so a program path containing spaces must be set as a list under `inspector:` in _qant.yml instead."
    )]
    pub inspector: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
