// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Contract tests for the tally binary
//!
//! These tests run the compiled binary and check its stdout, stderr, exit
//! code and the files it writes.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use similar_asserts::assert_eq;

fn tally() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tally"));
    cmd.env_remove("GITHUB_STEP_SUMMARY")
        .env_remove("GITHUB_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run tally")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../tally-formats/tests/fixtures")
        .join(name)
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_manual_failures_exit_one() {
    let output = run(tally().args(["--passed", "10", "--failed", "2"]));

    assert_eq!(output.status.code(), Some(1));
    let markdown = stdout(&output);
    assert!(markdown.contains("| **Total** | **12** |"));
    assert!(markdown.contains(":x: **Failed**"));
}

#[test]
fn test_manual_pass_exit_zero() {
    let output = run(tally().args(["--passed", "3", "-q"]));
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(":white_check_mark: **Passed**"));
}

#[test]
fn test_no_results_exit_zero() {
    let output = run(&mut tally());
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("> :warning: No test results found"));
}

#[test]
fn test_missing_file_exit_one() {
    let output = run(tally().args(["--file", "/nonexistent/tally/results.xml"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(
        "Error parsing results: Results file not found: /nonexistent/tally/results.xml"
    ));
}

#[test]
fn test_malformed_xml_exit_one() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.xml");
    std::fs::write(&path, "<testsuite><testcase>").expect("write");

    let output = run(tally().arg("-f").arg(&path));
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error parsing results: Failed to parse JUnit XML"));
}

#[test]
fn test_invalid_arguments_exit_two() {
    let output = run(tally().args(["--passed", "-3"]));
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Output modes
// ============================================================================

#[test]
fn test_json_output() {
    let output = run(tally().arg("--json").arg("-f").arg(fixture("results.tap")));

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should be JSON");
    assert!(value["status"] == "failed");
    assert!(value["format"] == "tap");
    assert!(value["total"] == 5);
    assert!(value["title"] == "Test Results");
    assert!(value["timestamp"].is_string());
    assert!(value["test_cases"].as_array().is_some_and(|cases| cases.len() == 5));
}

#[test]
fn test_github_sinks() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let step = dir.path().join("step_summary.md");
    let outputs = dir.path().join("github_output");

    let output = run(tally()
        .arg("--file")
        .arg(fixture("go-verbose.txt"))
        .args(["--title", "Go Tests", "--show-details"])
        .env("GITHUB_STEP_SUMMARY", &step)
        .env("GITHUB_OUTPUT", &outputs));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let markdown = std::fs::read_to_string(&step).expect("step summary written");
    assert!(markdown.starts_with("## Go Tests\n"));
    assert!(markdown.contains("*Format: go*"));
    assert!(markdown.contains("### Output"));

    let lines = std::fs::read_to_string(&outputs).expect("outputs written");
    let keys: Vec<&str> = lines
        .lines()
        .filter_map(|line| line.split_once('=').map(|(key, _)| key))
        .collect();
    assert_eq!(
        keys,
        vec!["status", "passed", "failed", "skipped", "total", "duration", "pass_rate"]
    );
    assert!(lines.contains("status=failed\n"));
    assert!(lines.contains("duration=0.418\n"));
    assert!(lines.contains("pass_rate=50.0\n"));
}

#[test]
fn test_output_file_overwrites() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("summary.md");
    std::fs::write(&path, "old report").expect("seed");

    let output = run(tally().args(["--passed", "1", "--no-badge", "-o"]).arg(&path));

    assert_eq!(output.status.code(), Some(0));
    let markdown = std::fs::read_to_string(&path).expect("report written");
    assert!(markdown.starts_with("## Test Results\n\n| Metric | Count |"));
    assert!(!markdown.contains("old report"));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = run(tally().args(["--passed", "1", "--verbose", "--json"]));

    assert_eq!(output.status.code(), Some(0));
    serde_json::from_str::<serde_json::Value>(&stdout(&output)).expect("stdout is pure JSON");
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_github_flags_without_env() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let output = run(tally()
        .current_dir(dir.path())
        .args(["--passed", "4", "--github-summary", "--github-outputs"]));

    assert_eq!(output.status.code(), Some(0));
    let markdown = stdout(&output);
    assert!(markdown.starts_with("## Test Results\n"));
    assert!(markdown.contains("| **Total** | **4** |"));
    assert!(!markdown.contains("status=passed"));

    let entries = std::fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 0, "no files should be created");
}

#[test]
fn test_empty_env_paths_fall_back() {
    let dir = tempfile::TempDir::new().expect("temp dir");

    let output = run(tally()
        .current_dir(dir.path())
        .args(["--failed", "1"])
        .env("GITHUB_STEP_SUMMARY", "")
        .env("GITHUB_OUTPUT", ""));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(":x: **Failed**"));
    assert_eq!(std::fs::read_dir(dir.path()).expect("read dir").count(), 0);
}
