// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test Anything Protocol output

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::capture_count;
use crate::format::Format;
use crate::model::{TestCase, TestStatus, TestSummary};

static PLAN_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^1\.\.(\d+)").expect("invalid tap plan regex"));

/// Matched against one line at a time so a result without a description
/// never runs into the following line
static RESULT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(ok|not ok)\s+(\d+)\s*-?\s*(.*)$").expect("invalid tap result regex")
});

const DIRECTIVES: [&str; 2] = ["# SKIP", "# TODO"];

/// Parse TAP output
///
/// A plan line (`1..N`) sets the total and is never replaced by the sum of
/// the individual results.
#[must_use]
pub fn parse(content: &str) -> TestSummary {
    let mut summary = TestSummary::new(Format::Tap);
    summary.raw_output = content.to_string();

    let plan = PLAN_LINE.captures(content).map(|caps| capture_count(&caps, 1));
    if let Some(planned) = plan {
        summary.total = planned;
    }

    for caps in content.lines().filter_map(|line| RESULT_LINE.captures(line)) {
        let mut status = if &caps[1] == "ok" {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        };
        let mut name = caps[3].trim().to_string();

        if let Some(directive) = DIRECTIVES.into_iter().find(|d| name.contains(d)) {
            status = TestStatus::Skipped;
            name = name.replace(directive, "").trim().to_string();
        }

        if name.is_empty() {
            name = format!("Test {}", &caps[2]);
        }

        summary.record(status);
        summary.test_cases.push(TestCase::new(name, status));
    }

    if plan.is_none() {
        summary.calculate_totals();
    }
    debug!(
        planned = ?plan,
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "Parsed TAP output"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_plan_and_skip_directive() {
        let summary = parse("1..3\nok 1 - a\nnot ok 2 - b\nok 3 - c # SKIP\n");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);

        let case = &summary.test_cases[2];
        assert_eq!(case.name, "c");
        assert_eq!(case.status, TestStatus::Skipped);
    }

    #[test]
    fn test_plan_is_authoritative() {
        let summary = parse("1..5\nok 1 - only one ran\n");
        assert_eq!(summary.total, 5);
        assert_eq!(summary.passed, 1);
    }

    #[test]
    fn test_todo_directive_and_default_names() {
        let summary = parse("ok 1\nnot ok 2 # TODO not implemented\nok 3 -\n");
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.test_cases[0].name, "Test 1");
        assert_eq!(summary.test_cases[1].name, "not implemented");
        assert_eq!(summary.test_cases[2].name, "Test 3");
    }

    #[test]
    fn test_skip_only_directive_defaults_name() {
        let summary = parse("ok 7 - # SKIP\n");
        assert_eq!(summary.test_cases[0].name, "Test 7");
        assert_eq!(summary.test_cases[0].status, TestStatus::Skipped);
    }

    #[test]
    fn test_windows_line_endings() {
        let summary = parse("1..2\r\nok 1 - first\r\nnot ok 2 - second\r\n");
        assert_eq!(summary.total, 2);
        assert_eq!(summary.test_cases[0].name, "first");
        assert_eq!(summary.test_cases[1].name, "second");
    }

    #[test]
    fn test_empty_input() {
        let summary = parse("");
        assert_eq!(summary.total, 0);
        assert!(summary.test_cases.is_empty());
    }
}
