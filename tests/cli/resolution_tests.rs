use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command as ProcessCommand;
use tempfile::TempDir;

fn git_available() -> bool {
    ProcessCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = ProcessCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git command should spawn");
    assert!(status.success(), "git {args:?} failed");
}

/// Repository with a single empty commit carrying one annotated tag.
fn tagged_repo(tag: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["config", "user.email", "docs@example.com"]);
    git(dir.path(), &["config", "user.name", "docs"]);
    git(dir.path(), &["commit", "--allow-empty", "-q", "-m", "initial"]);
    git(dir.path(), &["tag", "-a", tag, "-m", tag]);
    dir
}

#[test]
fn resolves_release_from_exact_tag() {
    if !git_available() {
        return;
    }
    let repo = tagged_repo("v1.2.3");

    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .arg(repo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.2.3"))
        .stderr(predicate::str::contains("Authentik-Manager version: v1.2.3"));
}

#[test]
fn normalizes_hyphenated_tag_names() {
    if !git_available() {
        return;
    }
    let repo = tagged_repo("1.2-3-gabc123");

    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .arg(repo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("version: 1.2.r3.abc123"));
}

#[test]
fn release_line_names_the_selected_project() {
    if !git_available() {
        return;
    }
    let repo = tagged_repo("v0.9.0");

    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .args(["--project", "sphinx-docs"])
        .arg(repo.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("sphinx-docs version: v0.9.0"));
}

#[test]
fn fails_outside_a_repository() {
    if !git_available() {
        return;
    }
    let dir = tempfile::tempdir().expect("temp dir");

    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tool invocation failed: git describe"));
}

#[test]
fn json_output_contains_resolved_release() {
    if !git_available() {
        return;
    }
    let repo = tagged_repo("v2.0.0");

    let assert = Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .args(["--format", "json"])
        .arg(repo.path())
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("stdout should be valid JSON");
    assert_eq!(json["release"], "v2.0.0");
    assert_eq!(json["html_theme"], "pydata_sphinx_theme");
    assert_eq!(json["master_doc"], "index");
}
