use assert_cmd::Command;
use predicates::prelude::*;

// The marker line is written before release resolution starts, so these
// tests run against an empty directory and ignore the final exit status.
// "NON-READ_THE_DOCS_BUILD" contains the hosted marker as a substring, which
// is why the hosted case also asserts the NON- form is absent.

fn run_in_empty_dir(vars: &[(&str, &str)], removed: &[&str]) -> assert_cmd::assert::Assert {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docs_conf"));
    for (key, value) in vars {
        cmd.env(key, value);
    }
    for key in removed {
        cmd.env_remove(key);
    }
    cmd.arg(dir.path()).assert()
}

#[test]
fn exact_true_selects_the_hosted_marker() {
    run_in_empty_dir(&[("READTHEDOCS", "True")], &[])
        .stderr(predicate::str::contains("READ_THE_DOCS_BUILD"))
        .stderr(predicate::str::contains("NON-READ_THE_DOCS_BUILD").not());
}

#[test]
fn lowercase_true_is_not_hosted() {
    run_in_empty_dir(&[("READTHEDOCS", "true")], &[])
        .stderr(predicate::str::contains("NON-READ_THE_DOCS_BUILD"));
}

#[test]
fn missing_variable_is_not_hosted() {
    run_in_empty_dir(&[], &["READTHEDOCS"])
        .stderr(predicate::str::contains("NON-READ_THE_DOCS_BUILD"));
}

#[test]
fn padded_value_is_not_hosted() {
    run_in_empty_dir(&[("READTHEDOCS", " True ")], &[])
        .stderr(predicate::str::contains("NON-READ_THE_DOCS_BUILD"));
}
