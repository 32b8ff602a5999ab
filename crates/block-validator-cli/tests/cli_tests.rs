//! Integration tests for the `blockcheck` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to run the `check` and `free`
//! subcommands through the actual binary, covering file and stdin schedules,
//! exit codes and JSON output.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the schedule.json fixture.
///
/// Standup 09:00-09:30, Deep work 10:00-11:00, Gym 12:00-13:00.
fn schedule_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/schedule.json")
}

fn blockcheck() -> Command {
    Command::cargo_bin("blockcheck").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_on_empty_day_succeeds() {
    blockcheck()
        .args(["check", "10:00-11:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 10:00-11:00 is free"));
}

#[test]
fn check_back_to_back_block_succeeds() {
    blockcheck()
        .args(["check", "11:00-12:00", "--schedule", schedule_path()])
        .assert()
        .success();
}

#[test]
fn check_overlap_exits_with_one() {
    blockcheck()
        .args(["check", "09:30-10:30", "--schedule", schedule_path()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("conflict with 10:00-11:00 (30 min)"));
}

#[test]
fn check_lists_every_conflict() {
    blockcheck()
        .args(["check", "09:00-12:30", "-s", schedule_path()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("09:00-09:30"))
        .stdout(predicate::str::contains("10:00-11:00"))
        .stdout(predicate::str::contains("12:00-13:00"));
}

#[test]
fn check_reads_schedule_from_stdin() {
    blockcheck()
        .args(["check", "10:30-10:45", "--schedule", "-"])
        .write_stdin(r#"[{"start":600,"end":660}]"#)
        .assert()
        .code(1);
}

#[test]
fn check_json_output() {
    let output = blockcheck()
        .args(["check", "09:30-10:30", "-s", schedule_path(), "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["placeable"], false);
    assert_eq!(report["candidate"]["start"], 570);
    assert_eq!(report["conflicts"][0]["index"], 1);
    assert_eq!(report["conflicts"][0]["overlap_minutes"], 30);
}

#[test]
fn check_inverted_range_is_invalid_input() {
    blockcheck()
        .args(["check", "11:00-10:00"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Empty interval"));
}

#[test]
fn check_malformed_range_is_invalid_input() {
    blockcheck()
        .args(["check", "noon-ish"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid candidate range"));
}

#[test]
fn check_missing_schedule_file_is_invalid_input() {
    blockcheck()
        .args(["check", "10:00-11:00", "-s", "/nonexistent/schedule.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn check_bad_schedule_json_is_invalid_input() {
    blockcheck()
        .args(["check", "10:00-11:00", "-s", "-"])
        .write_stdin("not json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid schedule JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// free subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn free_lists_gaps_in_window() {
    blockcheck()
        .args(["free", "-s", schedule_path(), "--window", "08:00-17:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("08:00-09:00 (60 min)"))
        .stdout(predicate::str::contains("09:30-10:00 (30 min)"))
        .stdout(predicate::str::contains("11:00-12:00 (60 min)"))
        .stdout(predicate::str::contains("13:00-17:00 (240 min)"));
}

#[test]
fn free_with_minimum_reports_first_fit() {
    blockcheck()
        .args(["free", "-s", schedule_path(), "-w", "09:00-17:00", "--min", "45"])
        .assert()
        .success()
        .stdout(predicate::eq("11:00-12:00 (60 min)\n"));
}

#[test]
fn free_json_output() {
    let output = blockcheck()
        .args(["free", "-s", schedule_path(), "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let slots: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 4);
    assert_eq!(slots[0]["start"], 0);
    assert_eq!(slots[0]["end"], 540);
    assert_eq!(slots[3]["end"], 1440);
}

#[test]
fn free_when_fully_booked() {
    blockcheck()
        .args(["free", "-s", schedule_path(), "-w", "10:00-11:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no free slots"));
}
