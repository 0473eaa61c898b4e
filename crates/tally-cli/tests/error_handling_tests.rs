//! Tests for error messages, suggestions and exit codes.

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("tally");
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_error_no_input() {
    tally()
        .arg("count")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Must specify either text or file"));
}

#[test]
fn test_error_both_inputs() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("input.txt");
    std::fs::write(&path, "a b").unwrap();

    tally()
        .args(["freq", "a", "-t", "a b", "--file"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot specify both text and file"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_missing_file() {
    let temp = TempDir::new().unwrap();

    tally()
        .args(["count", "--file"])
        .arg(temp.path().join("missing.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_error_no_command() {
    tally()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_error_unknown_command() {
    tally()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_error_invalid_project_name() {
    let temp = TempDir::new().unwrap();

    tally()
        .args(["rename", "--new-name", "word-tool", "--yes", "--root"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name 'word-tool'"));
}

#[test]
fn test_error_missing_config_file() {
    let temp = TempDir::new().unwrap();

    tally()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["count", "a"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_unknown_config_key() {
    tally()
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_error_shows_cause() {
    let temp = TempDir::new().unwrap();

    tally()
        .arg("-v")
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .args(["count", "a"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Caused by:"))
        .stderr(predicate::str::contains("--verbose").not());
}
