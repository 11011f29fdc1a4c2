use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".points-dashboard").join("config.json")
}

/// A base URL on a port nothing listens on.
fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api", port)
}

const BINARY_NAME: &str = "points-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("manage users and their point balances"));
}

#[test]
/// An unreachable API is reported, not treated as a failure.
fn status_against_offline_api_succeeds() {
    let tmp = temp_home_dir();
    let api_url = unreachable_api_url();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .arg("--api-url")
        .arg(&api_url)
        .env("HOME", tmp.path())
        .env_remove("POINTS_API_URL")
        .assert()
        .success()
        .stdout(contains("API Offline"))
        .stdout(contains("Health check endpoint not accessible"))
        .stdout(contains(api_url.as_str()));
}

#[test]
fn users_against_offline_api_fails() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("users")
        .arg("--api-url")
        .arg(unreachable_api_url())
        .env("HOME", tmp.path())
        .env_remove("POINTS_API_URL")
        .assert()
        .failure()
        .stdout(contains("Error connecting to the API"));
}

#[test]
fn invalid_api_url_is_rejected() {
    let tmp = temp_home_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("localhost:3001")
        .env("HOME", tmp.path())
        .assert()
        .failure();

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// set-api-url writes the config file and reset removes it.
fn set_api_url_then_reset() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("http://points.internal:8080/api/")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"api_url\": \"http://points.internal:8080/api\""));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Clearing configuration"));

    assert!(!config_path.exists());
}

#[test]
/// The saved URL is used when no flag or environment variable overrides it.
fn saved_api_url_is_used_by_status() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    let api_url = unreachable_api_url();
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, format!("{{\"api_url\":\"{}\"}}", api_url)).unwrap();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status")
        .env("HOME", tmp.path())
        .env_remove("POINTS_API_URL")
        .assert()
        .success()
        .stdout(contains(format!("Current API URL\t {}", api_url)));
}
