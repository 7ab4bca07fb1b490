#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temp project whose inspector is a shell script printing canned JSON.
fn project(config: Option<&str>, inspect_json: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("_quarto.yml"), "project:\n  type: website\n").unwrap();
    if let Some(cfg) = config {
        fs::write(dir.path().join("_qant.yml"), cfg).unwrap();
    }
    fs::write(dir.path().join("inspect.json"), inspect_json).unwrap();
    write_script(dir.path(), "touch inspected\ncat inspect.json\n");
    dir
}

fn write_script(root: &Path, body: &str) {
    fs::write(root.join("inspect.sh"), body).unwrap();
}

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("qant").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("QANT_LOG")
        .args(["--inspector", "sh inspect.sh"]);
    cmd
}

#[test]
fn all_categories_allowed() {
    let dir = project(
        Some("categories: [blog, tutorial]\n"),
        r#"{"files": {"a.qmd": {"metadata": {"categories": ["blog"]}}}}"#,
    );
    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("All categories validated successfully."));
}

#[test]
fn unlisted_category_fails() {
    let dir = project(
        Some("categories: [blog]\n"),
        r#"{"files": {"b.qmd": {"metadata": {"categories": ["blog", "news"]}}}}"#,
    );
    cmd(&dir)
        .assert()
        .code(1)
        .stderr(contains("Category validation failed!"))
        .stderr(contains("  b.qmd: 'news'"))
        .stderr(contains("Please add these categories to _qant.yml"))
        .stderr(contains("'blog'").not());
}

#[test]
fn missing_config_skips_inspection() {
    let dir = project(None, r#"{"files": {}}"#);
    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("_qant.yml not found. Skipping category validation."));
    assert!(!dir.path().join("inspected").exists());
}

#[test]
fn malformed_config_skips_inspection() {
    let dir = project(Some("tags: [blog]\n"), r#"{"files": {}}"#);
    cmd(&dir)
        .assert()
        .success()
        .stderr(contains("does not contain a valid 'categories' array."));
    assert!(!dir.path().join("inspected").exists());
}

#[test]
fn inspector_failure_is_reported() {
    let dir = project(Some("categories: [blog]\n"), "");
    write_script(dir.path(), "echo 'no project' >&2\nexit 1\n");
    cmd(&dir)
        .assert()
        .code(2)
        .stderr(contains("no project"));
}

#[test]
fn malformed_inspector_output_is_fatal() {
    let dir = project(Some("categories: [blog]\n"), "Usage: quarto inspect");
    cmd(&dir)
        .assert()
        .code(2)
        .stderr(contains("unexpected output"));
}

#[test]
fn json_output() {
    let dir = project(
        Some("categories: [blog]\n"),
        r#"{"files": {"a.qmd": {"metadata": {"categories": ["blog"]}}, "b.qmd": {"metadata": {"categories": ["news", "news"]}}}}"#,
    );
    let out = cmd(&dir)
        .args(["--output", "json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v["status"], "failed");
    assert_eq!(v["summary"]["files"], 2);
    assert_eq!(v["summary"]["violations"], 2);
    assert_eq!(v["violations"][1]["file"], "b.qmd");
    assert_eq!(v["violations"][1]["category"], "news");
}

#[test]
fn runs_from_subdirectory() {
    let dir = project(
        Some("categories: [blog]\n"),
        r#"{"files": {"posts/a.qmd": {"metadata": {"categories": ["blog"]}}}}"#,
    );
    let sub = dir.path().join("posts");
    fs::create_dir_all(&sub).unwrap();
    cmd(&dir)
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(contains("All categories validated successfully."));
}

#[test]
fn runs_from_subdirectory_without_flags() {
    let dir = project(
        Some("categories: [blog]\ninspector: [sh, inspect.sh]\n"),
        r#"{"files": {"posts/a.qmd": {"metadata": {"categories": ["news"]}}}}"#,
    );
    let sub = dir.path().join("posts");
    fs::create_dir_all(&sub).unwrap();
    let mut cmd = Command::cargo_bin("qant").unwrap();
    cmd.current_dir(&sub)
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(contains("  posts/a.qmd: 'news'"))
        .stderr(contains("../_qant.yml"));
    assert!(dir.path().join("inspected").exists());
}

#[test]
fn numeric_categories_are_validated() {
    let dir = project(
        Some("categories: [blog, 2024]\n"),
        r#"{"files": {"a.qmd": {"metadata": {"categories": [2024, "blog", 2023]}}}}"#,
    );
    cmd(&dir)
        .assert()
        .code(1)
        .stderr(contains("  a.qmd: '2023'"))
        .stderr(contains("'2024'").not());
}

#[test]
fn ill_typed_settings_are_noted() {
    let dir = project(
        Some("categories: [blog]\ninspector: quarto inspect\n"),
        r#"{"files": {"a.qmd": {"metadata": {"categories": ["blog"]}}}}"#,
    );
    cmd(&dir)
        .assert()
        .success()
        .stderr(contains("note: ignoring run settings in _qant.yml"))
        .stdout(contains("All categories validated successfully."));
}

#[test]
fn version_subcommand() {
    Command::cargo_bin("qant")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
