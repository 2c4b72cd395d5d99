//! CLI smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_help_describes_the_tracker() {
    Command::cargo_bin("fiatflow")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fiat-inflow signal tracker"))
        .stdout(predicate::str::contains("--once"))
        .stdout(predicate::str::contains("--symbols"));
}

#[test]
fn cli_version_matches_package() {
    Command::cargo_bin("fiatflow")
        .expect("binary exists")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[fetch]\ntimeout_secs = 0\n").expect("write temp config");

    Command::cargo_bin("fiatflow")
        .expect("binary exists")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}
