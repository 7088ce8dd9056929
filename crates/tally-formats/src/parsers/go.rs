// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -v` output
//!
//! Individual results look like `--- PASS: TestAdd (0.01s)` and the package
//! line like `ok  example.com/pkg  0.123s`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::capture_seconds;
use crate::format::Format;
use crate::model::{TestCase, TestStatus, TestSummary};

static RESULT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"--- (PASS|FAIL|SKIP): (\S+) \(([0-9.]+)s\)").expect("invalid go result regex")
});

static PACKAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:ok|FAIL)\s+\S+\s+([0-9.]+)s").expect("invalid go package regex")
});

/// Parse verbose Go test output
#[must_use]
pub fn parse(content: &str) -> TestSummary {
    let mut summary = TestSummary::new(Format::Go);
    summary.raw_output = content.to_string();

    for caps in RESULT_LINE.captures_iter(content) {
        let status = match &caps[1] {
            "PASS" => TestStatus::Passed,
            "FAIL" => TestStatus::Failed,
            _ => TestStatus::Skipped,
        };
        summary.record(status);
        summary
            .test_cases
            .push(TestCase::new(&caps[2], status).with_duration(capture_seconds(&caps, 3)));
    }

    if let Some(caps) = PACKAGE_LINE.captures(content) {
        summary.duration = capture_seconds(&caps, 1);
    }

    summary.calculate_totals();
    debug!(
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "Parsed go test output"
    );
    summary
}
