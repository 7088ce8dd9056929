// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! npm / Jest console output

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{capture_count, capture_seconds};
use crate::format::Format;
use crate::model::{TestCase, TestStatus, TestSummary};

/// `Tests: X passed, Y failed, Z skipped, W total`, each clause optional but
/// only recognized in that order
static TESTS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"Tests:\s*",
        r"(?:(\d+)\s+passed)?",
        r"(?:,?\s*(\d+)\s+failed)?",
        r"(?:,?\s*(\d+)\s+skipped)?",
        r"(?:,?\s*(\d+)\s+total)?",
    ))
    .expect("invalid jest tests regex")
});

static TIME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Time:\s*([0-9.]+)\s*s").expect("invalid jest time regex"));

static SUITE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(PASS|FAIL)\s+(\S+)").expect("invalid jest suite regex"));

/// Parse npm test / Jest output
#[must_use]
pub fn parse(content: &str) -> TestSummary {
    let mut summary = TestSummary::new(Format::Npm);
    summary.raw_output = content.to_string();

    if let Some(caps) = TESTS_LINE.captures(content) {
        summary.passed = capture_count(&caps, 1);
        summary.failed = capture_count(&caps, 2);
        summary.skipped = capture_count(&caps, 3);
        summary.total = capture_count(&caps, 4);
    }

    if let Some(caps) = TIME_LINE.captures(content) {
        summary.duration = capture_seconds(&caps, 1);
    }

    for caps in SUITE_LINE.captures_iter(content) {
        let status = if &caps[1] == "PASS" {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        summary.test_cases.push(TestCase::new(&caps[2], status));
    }

    summary.calculate_totals();
    debug!(
        passed = summary.passed,
        failed = summary.failed,
        total = summary.total,
        suites = summary.test_cases.len(),
        "Parsed npm test output"
    );
    summary
}
