//! Supporting helpers: colored message prefixes and path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Whether human output should be colorized.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if colors_enabled() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn warning_prefix() -> String {
    prefix("Warning:", |s| s.yellow().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.cyan().bold().to_string())
}

/// Display `p` relative to the working directory when possible.
pub fn rel_to_wd(p: &Path) -> String {
    let Ok(cwd) = std::env::current_dir() else {
        return p.to_string_lossy().to_string();
    };
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        cwd.join(p)
    };
    match pathdiff::diff_paths(&abs, &cwd) {
        Some(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().to_string(),
        _ => p.to_string_lossy().to_string(),
    }
}
