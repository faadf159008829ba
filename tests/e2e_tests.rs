//! End-to-End Tests for the Pomodoro timer binary.
//!
//! The interactive timer needs a real terminal, so these tests drive the
//! binary through the `replay` command, which feeds scripted events through
//! the same application state:
//! - Complete countdown
//! - Pause and restart flow
//! - Quit handling
//! - Configuration and script errors

use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn pomodoro() -> Command {
    let mut cmd = Command::cargo_bin("pomodoro-tui").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Countdown Flows
// ============================================================================

#[test]
fn e2e_idle_shows_ready_and_legend() {
    pomodoro()
        .args(["replay", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready: 25m0s"))
        .stdout(predicate::str::contains("s start • p stop • r reset • q quit"));
}

#[test]
fn e2e_complete_countdown() {
    pomodoro()
        .args(["--work", "1", "replay", "s", "tick*60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All is done!"))
        .stdout(predicate::str::contains("q quit").not());
}

#[test]
fn e2e_complete_countdown_json() {
    pomodoro()
        .args(["--work", "1", "replay", "--json", "s", "tick*60"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"status\":\"expired\",\"remainingMs\":0,\"done\":true}\n",
        ));
}

#[test]
fn e2e_millisecond_interval() {
    pomodoro()
        .args(["--work", "1", "--interval-ms", "1", "replay", "--json", "s", "tick*59999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"running\""))
        .stdout(predicate::str::contains("\"remainingMs\":1,"));
}

#[test]
fn e2e_pause_freezes_remaining() {
    pomodoro()
        .args(["replay", "s", "tick*30", "p", "tick*30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paused: 24m30s"));
}

#[test]
fn e2e_reset_halts_without_restoring() {
    pomodoro()
        .args(["replay", "--json", "s", "tick*10", "r"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"paused\""))
        .stdout(predicate::str::contains("\"remainingMs\":1490000"));
}

#[test]
fn e2e_start_after_pause_restarts() {
    pomodoro()
        .args(["replay", "s", "tick*30", "p", "s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: 25m0s"));
}

#[test]
fn e2e_quit_stops_processing() {
    pomodoro()
        .args(["replay", "--json", "s", "ctrl+c", "tick*100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remainingMs\":1500000"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn e2e_invalid_tick_count_fails() {
    pomodoro()
        .args(["replay", "tick*0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid replay script"));
}

#[test]
fn e2e_out_of_range_work_fails() {
    pomodoro()
        .args(["--work", "0", "replay", "s"])
        .assert()
        .failure();
}

#[test]
fn e2e_interval_equal_to_work_expires_in_one_tick() {
    pomodoro()
        .args(["--work", "1", "--interval-ms", "60000", "replay", "s", "tick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All is done!"));
}

#[test]
fn e2e_interval_out_of_range_fails() {
    pomodoro()
        .args(["--interval-ms", "60001", "replay", "s"])
        .assert()
        .failure();
}

#[test]
fn e2e_log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("pomodoro.log");

    pomodoro()
        .args(["--verbose", "--log-file"])
        .arg(&log_path)
        .args(["replay", "s", "tick"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("countdown started"), "log was: {}", contents);
}

#[test]
fn e2e_completions() {
    pomodoro()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro-tui"));
}
