//! End-to-end runs of the `guestbook` binary against an endpoint nobody
//! listens on, so every command takes its offline path.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// An http URL on a port that was free a moment ago.
fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/exec")
}

fn cli_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("guestbook").expect("guestbook binary");
    cmd.env_remove("GUESTBOOK_ENDPOINT")
        .env_remove("GUESTBOOK_CACHE")
        .env("RUST_LOG", "error")
        .arg("--config")
        .arg(dir.path().join("config.json"))
        .arg("--cache")
        .arg(dir.path().join("wishes.json"));
    cmd
}

#[test]
fn help_lists_the_commands() {
    Command::cargo_bin("guestbook")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("sign"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn offline_list_shows_the_defaults_and_seeds_the_cache() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("--endpoint")
        .arg(dead_endpoint())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 wishes from built-in defaults (offline)"))
        .stdout(predicate::str::contains("Zafirah & Rizwan"));

    assert!(dir.path().join("wishes.json").exists());
}

#[test]
fn offline_sign_is_kept_and_listed_from_the_cache() {
    let dir = TempDir::new().unwrap();
    let endpoint = dead_endpoint();

    cli_cmd(&dir)
        .arg("--endpoint")
        .arg(&endpoint)
        .args(["sign", "--name", "Aina", "--message", "Semoga bahagia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kept locally as local-"));

    cli_cmd(&dir)
        .arg("--endpoint")
        .arg(&endpoint)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 wishes from local cache"))
        .stdout(predicate::str::contains("Aina"));
}

#[test]
fn blank_wish_is_refused() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("--endpoint")
        .arg(dead_endpoint())
        .args(["sign", "--name", "   ", "--message", "hello"])
        .assert()
        .failure();
}

#[test]
fn missing_endpoint_is_an_error() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no endpoint configured"));
}

#[test]
fn ping_fails_when_offline() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .arg("--endpoint")
        .arg(dead_endpoint())
        .arg("ping")
        .assert()
        .failure()
        .stderr(predicate::str::contains("offline"));
}

#[test]
fn config_init_then_show_round_trips_the_endpoint() {
    let dir = TempDir::new().unwrap();

    cli_cmd(&dir)
        .args(["--endpoint", "https://script.example/exec", "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    cli_cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://script.example/exec"))
        .stdout(predicate::str::contains("\"config_version\": 1"));
}
