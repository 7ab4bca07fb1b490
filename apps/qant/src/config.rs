//! Configuration discovery, allow-list loading, and effective settings.
//!
//! qant reads `_qant.yml` (or `_qant.yaml`) from the project root, the
//! closest ancestor holding a qant or Quarto config file. The file carries
//! the category allow-list plus optional run settings.
//! Defaults:
//! - `inspector`: `quarto inspect`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{QantError, Result};
use crate::models::AllowList;
use crate::utils;
use serde::Deserialize;
use serde_yaml::Value as Yaml;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Config file names, in lookup order.
pub const CONFIG_FILES: [&str; 2] = ["_qant.yml", "_qant.yaml"];

/// Files marking a project root.
const PROJECT_MARKERS: [&str; 4] = ["_qant.yml", "_qant.yaml", "_quarto.yml", "_quarto.yaml"];

pub const DEFAULT_INSPECTOR: [&str; 2] = ["quarto", "inspect"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why validation is skipped for this run.
pub enum AbsentReason {
    /// No config file exists.
    NotFound,
    /// The file exists but has no usable `categories` list.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of reading the allow-list.
pub enum ConfigResult {
    Present(AllowList),
    Absent(AbsentReason),
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Optional run settings read from the config file next to `categories`.
pub struct QantConfig {
    pub inspector: Option<Vec<String>>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    pub project_root: PathBuf,
    pub config_path: PathBuf,
    pub inspector: Vec<String>,
    pub output: String,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops at the first directory holding a qant or Quarto config file.
/// A relative `start` is taken against the working directory.
pub fn detect_project_root(start: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => find_root(start, &cwd),
        Err(_) => find_root(start, Path::new("")),
    }
}

fn find_root(start: &Path, cwd: &Path) -> PathBuf {
    // Rebuild from components so `.` segments do not end the walk early.
    let start: PathBuf = cwd.join(start).components().collect();
    let mut cur = start.as_path();
    loop {
        if PROJECT_MARKERS.iter().any(|m| cur.join(m).is_file()) {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) if !p.as_os_str().is_empty() => cur = p,
            _ => return start,
        }
    }
}

/// Locate the config file under `root`; falls back to `_qant.yml` when
/// none exists so messages name the expected file.
pub fn config_path(root: &Path) -> PathBuf {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
        .unwrap_or_else(|| root.join(CONFIG_FILES[0]))
}

/// Read the allow-list from `path`.
///
/// A missing file or a missing/ill-typed `categories` field yields
/// `ConfigResult::Absent`. Any other read or YAML syntax failure is fatal.
pub fn load_allow_list(path: &Path) -> Result<ConfigResult> {
    let text = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(ConfigResult::Absent(AbsentReason::NotFound))
        }
        Err(source) => {
            return Err(QantError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let doc: Yaml = serde_yaml::from_str(&text).map_err(|source| QantError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match categories_of(&doc) {
        Some(list) => ConfigResult::Present(AllowList::new(list)),
        None => ConfigResult::Absent(AbsentReason::Malformed),
    })
}

/// `categories` as strings, or None unless it is a sequence of scalars.
///
/// Numbers and booleans keep their YAML spelling (`2024` -> "2024");
/// `null` items can never match a declared category and are dropped.
fn categories_of(doc: &Yaml) -> Option<Vec<String>> {
    let Yaml::Sequence(items) = doc.get("categories")? else {
        return None;
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Yaml::String(s) => out.push(s.clone()),
            Yaml::Number(n) => out.push(n.to_string()),
            Yaml::Bool(b) => out.push(b.to_string()),
            Yaml::Null => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Load run settings from the config file.
///
/// `Ok(None)` when the file is missing or is not YAML at all (the allow-list
/// loader reports those); `Err` when the settings have the wrong shape.
pub fn load_config(path: &Path) -> std::result::Result<Option<QantConfig>, String> {
    let Ok(s) = fs::read_to_string(path) else {
        return Ok(None);
    };
    let Ok(doc) = serde_yaml::from_str::<Yaml>(&s) else {
        return Ok(None);
    };
    if !doc.is_mapping() {
        return Ok(None);
    }
    serde_yaml::from_value(doc).map(Some).map_err(|e| e.to_string())
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
pub fn resolve_effective(
    cli_project_dir: Option<&str>,
    cli_config: Option<&str>,
    cli_inspector: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_project_dir.unwrap_or("."));
    let project_root = detect_project_root(&start);
    let config_path = match cli_config {
        Some(p) => project_root.join(p),
        None => config_path(&project_root),
    };
    let cfg = match load_config(&config_path) {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "invalid run settings");
            eprintln!(
                "{} ignoring run settings in {}: {}",
                utils::note_prefix(),
                utils::rel_to_wd(&config_path),
                e
            );
            QantConfig::default()
        }
    };

    let inspector = cli_inspector
        .map(split_command)
        .filter(|c| !c.is_empty())
        .or(cfg.inspector.filter(|c| !c.is_empty()))
        .unwrap_or_else(|| DEFAULT_INSPECTOR.iter().map(|s| s.to_string()).collect());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        project_root,
        config_path,
        inspector,
        output,
    }
}

fn split_command(cmd: &str) -> Vec<String> {
    cmd.split_whitespace().map(String::from).collect()
}
