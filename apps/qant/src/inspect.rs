//! Inspector invocation.
//!
//! The inspection tool is a subprocess whose stdout is a JSON description of
//! the project's files and their front matter. `Inspector` is the seam that
//! lets the lint pipeline run against a canned result in tests.

use crate::error::{QantError, Result};
use crate::models::inspect::InspectionResult;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Source of document metadata for one lint run.
pub trait Inspector {
    fn inspect(&self) -> Result<InspectionResult>;
}

/// Runs an external command (by default `quarto inspect`) once, without
/// retry or timeout.
pub struct CommandInspector {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl CommandInspector {
    /// `command` is program followed by its arguments; callers guarantee it
    /// is non-empty (see `config::resolve_effective`).
    pub fn new(command: &[String], cwd: &Path) -> Self {
        let (program, args) = match command.split_first() {
            Some((p, rest)) => (p.clone(), rest.to_vec()),
            None => (String::new(), Vec::new()),
        };
        Self {
            program,
            args,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Human-readable command line used in messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Inspector for CommandInspector {
    fn inspect(&self) -> Result<InspectionResult> {
        tracing::debug!(command = %self.display(), cwd = %self.cwd.display(), "running inspector");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| QantError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(QantError::ExternalToolFailure {
                command: self.display(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| QantError::MalformedOutput {
            command: self.display(),
            reason: "output is not valid UTF-8".to_string(),
        })?;
        let result =
            InspectionResult::from_json(&stdout).map_err(|reason| QantError::MalformedOutput {
                command: self.display(),
                reason,
            })?;
        tracing::debug!(files = result.files.len(), "inspector finished");
        Ok(result)
    }
}
