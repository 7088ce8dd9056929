// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! pytest JSON reports
//!
//! Two shapes are understood:
//! - `pytest --json-report`: an object with a `summary` block and a `tests` array
//! - `pytest --report-log`: an array of events, of which `TestReport` entries
//!   are counted
//!
//! Any other valid JSON document yields an empty summary.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{TestCase, TestStatus, TestSummary};

/// Output of the pytest-json-report plugin
#[derive(Debug, Deserialize)]
struct JsonReport {
    summary: ReportSummary,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    tests: Vec<ReportTest>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReportSummary {
    passed: i64,
    failed: i64,
    skipped: i64,
    error: i64,
    total: i64,
}

#[derive(Debug, Deserialize)]
struct ReportTest {
    #[serde(default)]
    nodeid: Option<String>,
    #[serde(default)]
    outcome: Option<String>,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    call: Option<CallPhase>,
}

#[derive(Debug, Deserialize)]
struct CallPhase {
    #[serde(default)]
    longrepr: Option<Value>,
}

/// One line of a pytest report log
#[derive(Debug, Deserialize)]
struct LogEntry {
    #[serde(rename = "$report_type", default)]
    report_type: Option<String>,
    #[serde(default)]
    outcome: Option<String>,
}

/// Parse a pytest JSON report
///
/// # Errors
///
/// Returns `FormatError::MalformedJson` if the content is not valid JSON.
pub fn parse(content: &str) -> Result<TestSummary, FormatError> {
    let document: Value = serde_json::from_str(content)?;
    let mut summary = TestSummary::new(Format::PytestJson);

    match document {
        Value::Object(map) if map.contains_key("summary") => {
            let report: JsonReport = serde_json::from_value(Value::Object(map))?;
            summary.passed = report.summary.passed;
            summary.failed = report.summary.failed;
            summary.skipped = report.summary.skipped;
            summary.errors = report.summary.error;
            summary.total = report.summary.total;
            summary.duration = report.duration.max(0.0);

            summary.test_cases = report.tests.into_iter().map(into_test_case).collect();
            debug!(
                total = summary.total,
                cases = summary.test_cases.len(),
                "Parsed pytest json-report"
            );
        }
        Value::Array(entries) => {
            let reports = entries
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|entry| serde_json::from_value::<LogEntry>(entry).ok())
                .filter(|entry| entry.report_type.as_deref() == Some("TestReport"));
            for entry in reports {
                match TestStatus::from_outcome(entry.outcome.as_deref().unwrap_or_default()) {
                    status @ (TestStatus::Passed | TestStatus::Failed | TestStatus::Skipped) => {
                        summary.record(status);
                    }
                    _ => {}
                }
            }
            summary.calculate_totals();
            debug!(total = summary.total, "Parsed pytest report log");
        }
        _ => debug!("JSON document is not a recognized pytest report"),
    }

    Ok(summary)
}

fn into_test_case(test: ReportTest) -> TestCase {
    let status = TestStatus::from_outcome(test.outcome.as_deref().unwrap_or("unknown"));
    let mut case =
        TestCase::new(test.nodeid.unwrap_or_default(), status).with_duration(test.duration);

    let longrepr = test
        .call
        .and_then(|call| call.longrepr)
        .and_then(|value| value.as_str().map(str::to_string))
        .filter(|text| !text.is_empty());
    if let Some(output) = longrepr {
        case = case.with_output(output);
    }
    case
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_parse_json_report() {
        let json = r#"{
            "created": 1700000000.0,
            "duration": 1.25,
            "summary": {"passed": 2, "failed": 1, "total": 3, "collected": 3},
            "tests": [
                {"nodeid": "tests/test_a.py::test_ok", "outcome": "passed", "duration": 0.1},
                {"nodeid": "tests/test_a.py::test_other", "outcome": "passed"},
                {
                    "nodeid": "tests/test_b.py::test_bad",
                    "outcome": "failed",
                    "duration": 0.2,
                    "call": {"outcome": "failed", "longrepr": "assert 1 == 2"}
                }
            ]
        }"#;

        let summary = parse(json).expect("Should parse");
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.duration, 1.25);
        assert_eq!(summary.test_cases.len(), 3);
        assert_eq!(summary.test_cases[0].name, "tests/test_a.py::test_ok");
        assert_eq!(summary.test_cases[0].duration, 0.1);
        assert_eq!(summary.test_cases[2].status, TestStatus::Failed);
        assert_eq!(summary.test_cases[2].output, "assert 1 == 2");
        assert_eq!(summary.test_cases[1].output, "");
    }

    #[test]
    fn test_summary_total_is_not_derived() {
        let summary = parse(r#"{"summary": {"passed": 4}}"#).expect("Should parse");
        assert_eq!(summary.passed, 4);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_parse_report_log() {
        let json = r#"[
            {"$report_type": "SessionStart", "pytest_version": "8.0.0"},
            {"$report_type": "TestReport", "nodeid": "t.py::a", "when": "call", "outcome": "passed"},
            {"$report_type": "TestReport", "nodeid": "t.py::b", "when": "call", "outcome": "failed"},
            {"$report_type": "TestReport", "nodeid": "t.py::c", "when": "setup", "outcome": "skipped"},
            {"$report_type": "CollectReport", "outcome": "failed"}
        ]"#;

        let summary = parse(json).expect("Should parse");
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total, 3);
        assert!(summary.test_cases.is_empty());
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        let summary = parse(r#"{"results": []}"#).expect("Should parse");
        assert_eq!(summary.total, 0);
        assert_eq!(summary.format_detected, Format::PytestJson);
    }

    #[test]
    fn test_invalid_json() {
        let result = parse("{not json");
        assert!(matches!(result, Err(FormatError::MalformedJson(_))));
    }

    #[test]
    fn test_unknown_outcome_and_missing_nodeid() {
        let summary =
            parse(r#"{"summary": {}, "tests": [{"outcome": "xfailed"}]}"#).expect("Should parse");
        assert_eq!(summary.test_cases[0].name, "unknown");
        assert_eq!(summary.test_cases[0].status, TestStatus::Unknown);
    }
}
