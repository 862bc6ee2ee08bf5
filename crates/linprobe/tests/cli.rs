//! End-to-end tests for the `linprobe` binary.
//!
//! None of these reach the real Linear API: they cover configuration
//! failures, an unreachable endpoint and interruption.

use assert_cmd::Command;
use predicates::prelude::*;

/// Every variable the binary reads configuration from.
const CONFIG_VARS: [&str; 8] = [
    "LINEAR_API_KEY",
    "LINEAR_TEAM_ID",
    "LINEAR_API_URL",
    "LINPROBE_UPDATE_DELAY_SECS",
    "LINPROBE_DELETE_DELAY_SECS",
    "LINPROBE_SEARCH_TERM",
    "LINPROBE_KEEP_ISSUE",
    "RUST_LOG",
];

/// Build a `Command` for the cargo-built `linprobe` binary with a clean
/// configuration environment.
fn linprobe() -> Command {
    let mut cmd = Command::cargo_bin("linprobe").unwrap();
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_succeeds() {
    linprobe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--keep-issue"));
}

#[test]
fn missing_credentials_exit_with_both_names() {
    linprobe()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LINEAR_API_KEY and LINEAR_TEAM_ID"))
        .stdout(predicate::str::contains("Test 1").not());
}

#[test]
fn blank_api_key_counts_as_missing() {
    linprobe()
        .env("LINEAR_API_KEY", "   ")
        .env("LINEAR_TEAM_ID", "ENG")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("LINEAR_API_KEY"))
        .stderr(predicate::str::contains("LINEAR_TEAM_ID").not());
}

#[test]
fn non_numeric_delay_is_rejected() {
    linprobe()
        .env("LINEAR_API_KEY", "lin_api_test_key")
        .env("LINEAR_TEAM_ID", "ENG")
        .env("LINPROBE_DELETE_DELAY_SECS", "soon")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn unreachable_endpoint_aborts_at_team_lookup() {
    linprobe()
        .env("LINEAR_API_KEY", "lin_api_test_key")
        .env("LINEAR_TEAM_ID", "ENG")
        .env("LINEAR_API_URL", "http://127.0.0.1:1/graphql")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Test 1: Get Team Info"))
        .stdout(predicate::str::contains("Test 2").not())
        .stderr(predicate::str::contains("cannot proceed without a valid team"));
}

#[test]
fn numeric_credentials_are_accepted() {
    linprobe()
        .env("LINEAR_API_KEY", "42")
        .env("LINEAR_TEAM_ID", "1234")
        .env("LINEAR_API_URL", "http://127.0.0.1:1/graphql")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Team ID: 1234"))
        .stderr(predicate::str::contains("invalid configuration").not())
        .stderr(predicate::str::contains("cannot proceed without a valid team"));
}

#[cfg(unix)]
#[test]
fn interrupt_exits_zero() {
    use std::net::TcpListener;
    use std::process::{Command as StdCommand, Stdio};

    use assert_cmd::cargo::CommandCargoExt;

    // Accepts the connection but never answers, so the team lookup hangs.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/graphql", listener.local_addr().unwrap());

    let mut cmd = StdCommand::cargo_bin("linprobe").unwrap();
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    let mut child = cmd
        .env("LINEAR_API_KEY", "lin_api_test_key")
        .env("LINEAR_TEAM_ID", "ENG")
        .env("LINEAR_API_URL", &url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let (_conn, _) = listener.accept().unwrap();
    let kill = format!("kill -s INT {}", child.id());
    let sent = StdCommand::new("sh")
        .args(["-c", kill.as_str()])
        .status()
        .unwrap();
    assert!(sent.success());

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}
