//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("mietermatch").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("[default: mietermatch.db]"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("mietermatch").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mietermatch"));
}

#[test]
fn test_status_without_key() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("missing.db");

    let mut cmd = Command::cargo_bin("mietermatch").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BREVO_API_KEY")
        .arg("status")
        .arg("--database")
        .arg(&db);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"file_exists\": false"))
        .stdout(predicate::str::contains("\"active\": false"));
}

#[test]
fn test_status_with_key() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("present.db");
    std::fs::write(&db, b"").unwrap();

    let mut cmd = Command::cargo_bin("mietermatch").unwrap();
    cmd.current_dir(dir.path())
        .env("BREVO_API_KEY", "xkeysib-smoke")
        .arg("status")
        .arg("--database")
        .arg(&db);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"file_exists\": true"))
        .stdout(predicate::str::contains("\"active\": true"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("mietermatch").unwrap();
    cmd.arg("match");

    cmd.assert().failure();
}
