//! qant CLI binary entry point.
//! Resolves configuration, runs the lint pipeline and maps the outcome to
//! an exit code: 0 clean or skipped, 1 violations, 2 fatal error.

use clap::Parser;
use qant::cli::{Cli, Commands, LintArgs};
use qant::inspect::CommandInspector;
use qant::lint::{self, LintOutcome};
use qant::{config, output, utils};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let args = match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Some(Commands::Lint(args)) => args,
        None => cli.lint,
    };
    std::process::exit(run(&args));
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QANT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &LintArgs) -> i32 {
    let eff = config::resolve_effective(
        args.project_dir.as_deref(),
        args.config.as_deref(),
        args.inspector.as_deref(),
        args.output.as_deref(),
    );
    tracing::debug!(
        root = %eff.project_root.display(),
        config = %eff.config_path.display(),
        inspector = ?eff.inspector,
        "resolved configuration"
    );
    if eff.output != "human" && eff.output != "json" {
        eprintln!(
            "{} unknown output mode '{}' (expected human|json)",
            utils::error_prefix(),
            eff.output
        );
        return 2;
    }

    let config_name = utils::rel_to_wd(&eff.config_path);
    let inspector = CommandInspector::new(&eff.inspector, &eff.project_root);
    match lint::run_lint(&eff.config_path, &inspector) {
        Ok(LintOutcome::Skipped(reason)) => {
            output::print_skip(reason, &config_name, &eff.output);
            0
        }
        Ok(LintOutcome::Checked(report)) => {
            output::print_report(&report, &config_name, &eff.output);
            if report.passed() {
                0
            } else {
                1
            }
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            2
        }
    }
}
