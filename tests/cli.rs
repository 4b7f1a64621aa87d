//! Binary tests for commands that never touch the backend.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn economy(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("economy").unwrap();
    cmd.env("ECONOMY_CLI_DATA_DIR", data_dir.path())
        .env_remove("ECONOMY_API_URL")
        .env_remove("ECONOMY_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("economy --help"));
}

#[test]
fn config_show_defaults() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8080/api (default)"));
}

#[test]
fn set_and_reset_api_url() {
    let dir = TempDir::new().unwrap();

    economy(&dir)
        .args(["config", "set-api-url", "http://192.168.0.10:8080/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://192.168.0.10:8080/api"));

    assert!(dir.path().join("config.json").exists());

    economy(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://192.168.0.10:8080/api (custom)"));

    economy(&dir)
        .args(["config", "reset-api-url"])
        .assert()
        .success();

    economy(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn currency_symbol_is_persisted() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .args(["config", "set-currency", "US$"])
        .assert()
        .success();

    economy(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency:        US$"));
}

#[test]
fn invalid_api_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .args(["config", "set-api-url", "localhost:8080"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http:// or https://"));
}

#[test]
fn data_commands_require_login() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .args(["expense", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn invalid_login_form_never_reaches_backend() {
    let dir = TempDir::new().unwrap();
    // Nothing listens on port 9; a request would fail with a connection error
    economy(&dir)
        .args([
            "--api-url",
            "http://127.0.0.1:9",
            "login",
            "--email",
            "not-an-email",
            "--password",
            "secret1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email"));
}

#[test]
fn invalid_month_is_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .args(["status", "--month", "2025-13"])
        .assert()
        .failure();
}

#[test]
fn logout_without_session_succeeds() {
    let dir = TempDir::new().unwrap();
    economy(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));
}
