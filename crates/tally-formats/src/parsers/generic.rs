// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Best-effort scanning of unstructured text

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{capture_count, capture_seconds};
use crate::format::Format;
use crate::model::TestSummary;

#[derive(Debug, Clone, Copy)]
enum Counter {
    Passed,
    Failed,
    Skipped,
    Errors,
}

/// Tried in order; a later match for the same counter overwrites an earlier one
static COUNT_PATTERNS: Lazy<Vec<(Regex, Counter)>> = Lazy::new(|| {
    [
        // "X passed, Y failed"
        (r"(?i)(\d+)\s+(?:tests?\s+)?passed", Counter::Passed),
        (r"(?i)(\d+)\s+(?:tests?\s+)?failed", Counter::Failed),
        (r"(?i)(\d+)\s+(?:tests?\s+)?skipped", Counter::Skipped),
        (r"(?i)(\d+)\s+(?:tests?\s+)?errors?", Counter::Errors),
        // "passed: X, failed: Y"
        (r"(?i)passed:\s*(\d+)", Counter::Passed),
        (r"(?i)failed:\s*(\d+)", Counter::Failed),
        (r"(?i)skipped:\s*(\d+)", Counter::Skipped),
    ]
    .into_iter()
    .map(|(pattern, counter)| {
        (
            Regex::new(pattern).expect("invalid generic count regex"),
            counter,
        )
    })
    .collect()
});

static TOTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s+(?:tests?\s+)?total").expect("invalid generic total regex")
});

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:time|duration|took):\s*([0-9.]+)\s*s")
        .expect("invalid generic duration regex")
});

/// Scan arbitrary text for common "N passed" / "failed: N" phrasings
///
/// No test cases are produced; only the counters, total and duration.
#[must_use]
pub fn parse(content: &str) -> TestSummary {
    let mut summary = TestSummary::new(Format::Generic);
    summary.raw_output = content.to_string();

    for (pattern, counter) in COUNT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(content) {
            let value = capture_count(&caps, 1);
            match counter {
                Counter::Passed => summary.passed = value,
                Counter::Failed => summary.failed = value,
                Counter::Skipped => summary.skipped = value,
                Counter::Errors => summary.errors = value,
            }
        }
    }

    match TOTAL.captures(content) {
        Some(caps) => summary.total = capture_count(&caps, 1),
        None => summary.calculate_totals(),
    }

    if let Some(caps) = DURATION.captures(content) {
        summary.duration = capture_seconds(&caps, 1);
    }

    debug!(
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        errors = summary.errors,
        total = summary.total,
        "Scanned generic output"
    );
    summary
}
