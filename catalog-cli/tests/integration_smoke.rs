//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--request-timeout"));
}

#[test]
fn test_migrate_help() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("migrate").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Create catalog tables"));
}

#[test]
fn test_bad_database_url_fails() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("migrate")
        .arg("--database-url")
        .arg("not a url")
        .env_remove("DATABASE_URL");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid database configuration"));
}

#[test]
fn test_unknown_command() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure();
}
