use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "gramdash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// An empty account URL is rejected before any network call.
fn set_account_rejects_empty_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-account")
        .arg("--url")
        .arg("   ")
        .assert()
        .failure()
        .stderr(contains("URL cannot be empty"));
}

#[test]
/// A URL outside instagram.com is rejected before any network call.
fn set_account_rejects_non_instagram_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-account")
        .arg("--url")
        .arg("https://example.com/profile")
        .assert()
        .failure()
        .stderr(contains("Must be a valid Instagram URL"));
}

#[test]
/// Start dates must parse as YYYY-MM-DD.
fn start_rejects_malformed_date() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--start-date")
        .arg("28.08.2026")
        .assert()
        .failure();
}

#[test]
#[ignore] // This requires a live backend instance.
fn account_prints_configured_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("account")
        .env("GRAMDASH_ENVIRONMENT", "local")
        .assert()
        .success();
}
