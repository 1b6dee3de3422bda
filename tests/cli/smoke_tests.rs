use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs_conf"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_theme() {
    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .args(["--html-theme", "furo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown HTML theme"));
}

#[test]
fn rejects_unknown_extension() {
    Command::new(env!("CARGO_BIN_EXE_docs_conf"))
        .args(["--extension", "sphinx.ext.napoleon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown Sphinx extension"));
}
