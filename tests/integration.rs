// Integration tests for the s-core CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the s-core binary, isolated from any user config.
fn s_core(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("s-core").expect("binary should exist");
    cmd.current_dir(home.path()).env("HOME", home.path());
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("s-core"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Youth soccer performance"));
}

#[test]
fn score_requires_input() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_conflict() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .args(["-v", "--quiet", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn analyze_missing_input_exits_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .args(["analyze", "missing.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn check_succeeds_with_builtin_tables() {
    let home = TempDir::new().expect("temp dir should be created");
    s_core(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("check: ok (13 standards, 8 categories"));
}
