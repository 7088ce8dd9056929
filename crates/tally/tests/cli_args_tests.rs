// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for argument parsing
//!
//! These tests verify flag names, defaults and value validation without
//! running the binary.

use std::path::PathBuf;

use clap::Parser;
use proptest::prelude::*;
use similar_asserts::assert_eq;
use tally::config::{Config, FormatArg, Input};
use tally_formats::{Format, ManualCounts};
use tally_report::RenderOptions;

fn parse(args: &[&str]) -> Config {
    let mut argv = vec!["tally"];
    argv.extend_from_slice(args);
    Config::try_parse_from(argv).expect("parse should succeed")
}

// ============================================================================
// Input selection
// ============================================================================

#[test]
fn test_file_short_flags() {
    let config = parse(&["-f", "results.xml", "-t", "junit"]);
    assert_eq!(config.file, Some(PathBuf::from("results.xml")));
    assert_eq!(config.format, FormatArg::Junit);
    assert_eq!(
        config.input(),
        Input::File {
            path: PathBuf::from("results.xml"),
            format: Some(Format::Junit),
        }
    );
}

#[test]
fn test_format_values() {
    let expected = [
        ("auto", None),
        ("junit", Some(Format::Junit)),
        ("pytest-json", Some(Format::PytestJson)),
        ("go", Some(Format::Go)),
        ("npm", Some(Format::Npm)),
        ("tap", Some(Format::Tap)),
        ("generic", Some(Format::Generic)),
    ];
    for (value, format) in expected {
        let config = parse(&["--format", value]);
        assert_eq!(config.format.format(), format, "--format {value}");
    }
}

#[test]
fn test_unknown_format_rejected() {
    let result = Config::try_parse_from(["tally", "--format", "xunit"]);
    assert!(result.is_err());
}

#[test]
fn test_manual_counts() {
    let config = parse(&["--passed", "10", "--failed", "2", "--duration", "4.5"]);
    assert_eq!(
        config.input(),
        Input::Manual(ManualCounts {
            passed: 10,
            failed: 2,
            skipped: 0,
            errors: 0,
            duration: 4.5,
        })
    );
}

#[test]
fn test_negative_counts_rejected() {
    for flag in ["--passed", "--failed", "--skipped", "--errors"] {
        let result = Config::try_parse_from(["tally", flag, "-1"]);
        assert!(result.is_err(), "{flag} -1 should be rejected");
    }
}

#[test]
fn test_invalid_duration_rejected() {
    for value in ["-0.5", "inf", "abc"] {
        let result = Config::try_parse_from(["tally", "--duration", value]);
        assert!(result.is_err(), "--duration {value} should be rejected");
    }
}

// ============================================================================
// Report shaping
// ============================================================================

#[test]
fn test_report_defaults() {
    let config = parse(&[]);
    assert_eq!(config.title, "Test Results");
    assert_eq!(config.render_options(), RenderOptions::default());
    assert!(!config.json);
}

#[test]
fn test_report_flags() {
    let config = parse(&[
        "--title",
        "Integration",
        "--show-details",
        "--show-passed",
        "--max-lines",
        "0",
        "--no-badge",
        "--json",
    ]);
    assert_eq!(config.title, "Integration");
    assert!(config.json);
    assert_eq!(
        config.render_options(),
        RenderOptions {
            show_details: true,
            show_passed: true,
            max_lines: 0,
            include_badge: false,
        }
    );
}

#[test]
fn test_output_flags() {
    let config = parse(&["-o", "summary.md", "--github-summary", "--github-outputs"]);
    assert_eq!(config.output, Some(PathBuf::from("summary.md")));
    assert!(config.github_summary);
    assert!(config.github_outputs);
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_and_quiet() {
    assert_eq!(parse(&["-v"]).log_level(), tracing::Level::DEBUG);
    assert_eq!(parse(&["-q"]).log_level(), tracing::Level::WARN);
    assert_eq!(parse(&[]).log_level(), tracing::Level::INFO);
}

#[test]
fn test_flag_value_syntax_not_supported() {
    let result = Config::try_parse_from(["tally", "--json=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

proptest! {
    #[test]
    fn manual_counts_round_trip_through_cli(
        passed in 0i64..1_000_000,
        failed in 0i64..1_000_000,
        skipped in 0i64..1_000_000,
        errors in 0i64..1_000_000,
    ) {
        let config = parse(&[
            "--passed", &passed.to_string(),
            "--failed", &failed.to_string(),
            "--skipped", &skipped.to_string(),
            "--errors", &errors.to_string(),
        ]);
        let Input::Manual(counts) = config.input() else {
            panic!("expected manual input");
        };
        prop_assert_eq!(counts.passed, passed);
        prop_assert_eq!(counts.failed, failed);
        prop_assert_eq!(counts.skipped, skipped);
        prop_assert_eq!(counts.errors, errors);
    }
}
