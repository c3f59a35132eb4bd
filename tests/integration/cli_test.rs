//! Integration tests for the ccusage-rainbow binary.
//!
//! The binary needs a real terminal, so these only cover paths that exit
//! before the full-screen session starts.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ccr() -> Command {
    let mut cmd = Command::cargo_bin("ccusage-rainbow").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    ccr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rainbow"))
        .stdout(predicate::str::contains("--size"))
        .stdout(predicate::str::contains("[TEXT]"));
}

#[test]
fn help_hides_easter_egg_flags() {
    ccr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bankrupt").not())
        .stdout(predicate::str::contains("--hi ").not());
}

#[test]
fn version_includes_package_version() {
    ccr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_print_script() {
    ccr()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ccusage-rainbow"));
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn unknown_size_is_a_usage_error() {
    ccr()
        .args(["--size", "huge", "HELLO"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported font size 'huge'"));
}

#[test]
fn unknown_shell_is_a_usage_error() {
    ccr().args(["--completions", "teletype"]).assert().code(2);
}

// ============================================================================
// Startup failures
// ============================================================================

#[test]
fn without_a_terminal_exits_1() {
    ccr()
        .arg("HELLO")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn log_file_is_created_before_terminal_check() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("ccr.log");

    ccr()
        .arg("--log-file")
        .arg(&log)
        .arg("HELLO")
        .assert()
        .code(1);

    assert!(log.exists());
}

#[test]
fn unwritable_log_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("missing").join("ccr.log");

    ccr()
        .arg("--log-file")
        .arg(&log)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create log file"));
}
