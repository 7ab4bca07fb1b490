//! Fatal error types.
//!
//! A missing or malformed allow-list is not an error (see
//! `config::ConfigResult`), and category violations are reported as data.
//! Everything here aborts the run.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QantError>;

#[derive(Debug, Error)]
pub enum QantError {
    /// The config file exists but could not be read (permissions, encoding).
    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML.
    #[error("failed to parse {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The inspection program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The inspection program ran but reported failure.
    #[error("Failed to run {command} ({status}): {stderr}")]
    ExternalToolFailure {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The inspection program succeeded but its output has the wrong shape.
    #[error("unexpected output from {command}: {reason}")]
    MalformedOutput { command: String, reason: String },
}
