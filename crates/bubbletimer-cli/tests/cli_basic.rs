//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against an isolated data
//! directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against the given data dir and return output.
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "bubbletimer-cli", "--"])
        .args(args)
        .env("BUBBLETIMER_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn select_show_prints_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["select", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["minutes"], 1);
    assert_eq!(parsed["seconds"], 5);
}

#[test]
fn start_then_history_lists_one_active_session() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["timer", "start"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionStarted"));

    let (stdout, _, code) = run_cli(dir.path(), &["history", "list", "--json"]);
    assert_eq!(code, 0);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["status"], "active");
    assert_eq!(sessions[0]["duration"], 65.0);
    assert_eq!(sessions[0]["label"], "01:05");
}

#[test]
fn preset_start_cancel_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["select", "preset", "5m"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("5m"));

    let (_, _, code) = run_cli(dir.path(), &["timer", "start"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "cancel"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionCancelled"));

    let (stdout, _, _) = run_cli(dir.path(), &["history", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sessions[0]["status"], "cancelled");
    assert_eq!(sessions[0]["label"], "5m");
}

#[test]
fn custom_zero_duration_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["select", "custom", "0", "0"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Time cannot be zero"));

    // No engine call was made, so no session exists.
    let (stdout, _, _) = run_cli(dir.path(), &["history", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(sessions.as_array().unwrap().is_empty());
}

#[test]
fn tick_counts_down_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["select", "custom", "0", "2"]);
    run_cli(dir.path(), &["timer", "start"]);

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "tick"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("StateSnapshot"));

    let (stdout, _, code) = run_cli(dir.path(), &["timer", "tick"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SessionFinished"));

    let (stdout, _, _) = run_cli(dir.path(), &["history", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(sessions[0]["status"], "finished");
}

#[test]
fn history_clear_empties_storage() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["timer", "start"]);
    run_cli(dir.path(), &["timer", "cancel"]);

    let (stdout, _, code) = run_cli(dir.path(), &["history", "clear"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("HistoryCleared"));

    let (stdout, _, _) = run_cli(dir.path(), &["history", "list", "--json"]);
    let sessions: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(sessions.as_array().unwrap().is_empty());
}

#[test]
fn config_get_and_set() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "history.display_limit"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "history.display_limit", "5"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "history.display_limit"]);
    assert_eq!(stdout.trim(), "5");
}
