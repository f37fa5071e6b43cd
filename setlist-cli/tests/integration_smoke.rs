//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_config_path_honours_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.env("SETLIST_CONFIG", &path).arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\nbind = \"127.0.0.1:4040\"").unwrap();

    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.env("SETLIST_CONFIG", file.path())
        .env_remove("SETLIST_BIND")
        .arg("config")
        .arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:4040"));
}

#[test]
fn test_bad_bind_env_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.env("SETLIST_CONFIG", dir.path().join("missing.toml"))
        .env("SETLIST_BIND", "not-an-address")
        .arg("config")
        .arg("show");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SETLIST_BIND"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("setlist").unwrap();
    cmd.arg("bogus");

    cmd.assert().failure();
}
