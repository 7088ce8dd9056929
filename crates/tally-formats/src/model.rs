// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Normalized test result types
//!
//! Every parser fills a [`TestSummary`]; the overall [`RunStatus`] and the
//! pass rate are always computed from the stored counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::Format;

/// Title used when the caller does not provide one
pub const DEFAULT_TITLE: &str = "Test Results";

/// Outcome of a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// Test passed
    Passed,
    /// Test failed an assertion
    Failed,
    /// Test was skipped (or marked TODO)
    Skipped,
    /// Test errored outside of its assertions
    Error,
    /// Outcome not recognized
    Unknown,
}

impl TestStatus {
    /// Map an outcome string as written by pytest
    #[must_use]
    pub fn from_outcome(outcome: &str) -> Self {
        match outcome {
            "passed" => TestStatus::Passed,
            "failed" => TestStatus::Failed,
            "skipped" => TestStatus::Skipped,
            "error" => TestStatus::Error,
            _ => TestStatus::Unknown,
        }
    }

    /// Whether this outcome counts against the run
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, TestStatus::Failed | TestStatus::Error)
    }
}

/// Overall status of a run, derived from its counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// At least one test passed and none failed
    Passed,
    /// At least one failure or error
    Failed,
    /// Nothing conclusive was found
    Unknown,
}

impl RunStatus {
    /// Lowercase name used in outputs
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Passed => "passed",
            RunStatus::Failed => "failed",
            RunStatus::Unknown => "unknown",
        }
    }
}

/// A single test's outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Test name, never empty
    pub name: String,
    /// Optional qualifier (JUnit classname)
    #[serde(default)]
    pub classname: Option<String>,
    /// Outcome
    pub status: TestStatus,
    /// Duration in seconds
    #[serde(default)]
    pub duration: f64,
    /// Short failure or skip reason
    #[serde(default)]
    pub message: String,
    /// Longer diagnostic output
    #[serde(default)]
    pub output: String,
}

impl TestCase {
    /// Create a test case; an empty name becomes `"unknown"`
    #[must_use]
    pub fn new(name: impl Into<String>, status: TestStatus) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = "unknown".to_string();
        }
        Self {
            name,
            classname: None,
            status,
            duration: 0.0,
            message: String::new(),
            output: String::new(),
        }
    }

    /// Set the classname; empty strings are ignored
    #[must_use]
    pub fn with_classname(mut self, classname: impl Into<String>) -> Self {
        let classname = classname.into();
        self.classname = (!classname.is_empty()).then_some(classname);
        self
    }

    /// Set the duration, clamped to be non-negative
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = non_negative(seconds);
        self
    }

    /// Set the short message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the diagnostic output
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// `classname::name` when a classname is known, otherwise just the name
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.classname {
            Some(classname) => format!("{}::{}", classname, self.name),
            None => self.name.clone(),
        }
    }
}

/// Counts supplied directly instead of parsed from a file
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualCounts {
    /// Passed tests
    pub passed: i64,
    /// Failed tests
    pub failed: i64,
    /// Skipped tests
    pub skipped: i64,
    /// Errored tests
    pub errors: i64,
    /// Duration in seconds
    pub duration: f64,
}

/// Aggregated result of one test run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Display title
    pub title: String,
    /// Passed tests
    pub passed: i64,
    /// Failed tests
    pub failed: i64,
    /// Skipped tests
    pub skipped: i64,
    /// Errored tests
    pub errors: i64,
    /// Total tests, reported by the source or derived from the counters
    pub total: i64,
    /// Duration in seconds
    pub duration: f64,
    /// Individual test cases in discovery order
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    /// Full captured text for textual formats
    #[serde(default)]
    pub raw_output: String,
    /// Which parser produced this summary
    #[serde(rename = "format")]
    pub format_detected: Format,
    /// When the report was generated; never set by a parser
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TestSummary {
    /// Create an empty summary tagged with the format that will fill it
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            passed: 0,
            failed: 0,
            skipped: 0,
            errors: 0,
            total: 0,
            duration: 0.0,
            test_cases: Vec::new(),
            raw_output: String::new(),
            format_detected: format,
            timestamp: None,
        }
    }

    /// Build a summary from explicit counts
    #[must_use]
    pub fn manual(counts: ManualCounts) -> Self {
        let mut summary = Self::new(Format::Manual);
        summary.passed = counts.passed;
        summary.failed = counts.failed;
        summary.skipped = counts.skipped;
        summary.errors = counts.errors;
        summary.duration = non_negative(counts.duration);
        summary.calculate_totals();
        summary
    }

    /// Fill `total` from the counters unless the source already set it
    pub fn calculate_totals(&mut self) {
        if self.total == 0 {
            self.total = self.component_sum();
        }
    }

    /// `passed + failed + skipped + errors`
    #[must_use]
    pub fn component_sum(&self) -> i64 {
        self.passed
            .saturating_add(self.failed)
            .saturating_add(self.skipped)
            .saturating_add(self.errors)
    }

    /// Increment the counter matching a case outcome
    ///
    /// `Unknown` outcomes are not counted.
    pub fn record(&mut self, status: TestStatus) {
        let counter = match status {
            TestStatus::Passed => &mut self.passed,
            TestStatus::Failed => &mut self.failed,
            TestStatus::Skipped => &mut self.skipped,
            TestStatus::Error => &mut self.errors,
            TestStatus::Unknown => return,
        };
        *counter = counter.saturating_add(1);
    }

    /// Overall status derived from the counters
    #[must_use]
    pub fn status(&self) -> RunStatus {
        if self.failed > 0 || self.errors > 0 {
            RunStatus::Failed
        } else if self.passed > 0 {
            RunStatus::Passed
        } else {
            RunStatus::Unknown
        }
    }

    /// Percentage of passed tests, `0.0` when there are no tests
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total as f64) * 100.0
    }

    /// Cases that failed or errored, in discovery order
    pub fn failed_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases.iter().filter(|tc| tc.status.is_failure())
    }

    /// Cases that passed, in discovery order
    pub fn passed_cases(&self) -> impl Iterator<Item = &TestCase> {
        self.test_cases
            .iter()
            .filter(|tc| tc.status == TestStatus::Passed)
    }
}

impl Default for TestSummary {
    fn default() -> Self {
        Self::new(Format::Unknown)
    }
}

/// Finite and non-negative seconds, otherwise `0.0`
pub(crate) fn non_negative(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
