//! Lint runner: load the allow-list, inspect, validate.
//!
//! When no allow-list is configured the run is skipped before the inspector
//! is invoked.

use crate::config::{self, AbsentReason, ConfigResult};
use crate::error::Result;
use crate::inspect::Inspector;
use crate::models::{Report, Summary};
use crate::validate::validate;
use std::path::Path;

#[derive(Debug, PartialEq, Eq)]
/// Result of one lint invocation.
pub enum LintOutcome {
    Skipped(AbsentReason),
    Checked(Report),
}

/// Run lint for the config at `config_path`, using `inspector` to obtain
/// document metadata.
pub fn run_lint(config_path: &Path, inspector: &dyn Inspector) -> Result<LintOutcome> {
    let allowed = match config::load_allow_list(config_path)? {
        ConfigResult::Present(allowed) => allowed,
        ConfigResult::Absent(reason) => {
            tracing::debug!(?reason, path = %config_path.display(), "allow-list absent");
            return Ok(LintOutcome::Skipped(reason));
        }
    };
    tracing::debug!(categories = allowed.len(), "allow-list loaded");

    let inspection = inspector.inspect()?;
    let violations = validate(&inspection, &allowed);
    tracing::debug!(
        files = inspection.files.len(),
        violations = violations.len(),
        "validation finished"
    );
    Ok(LintOutcome::Checked(Report {
        summary: Summary {
            files: inspection.files.len(),
            violations: violations.len(),
        },
        violations,
    }))
}
