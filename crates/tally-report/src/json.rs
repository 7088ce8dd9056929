// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON export of a summary
//!
//! The document holds every stored [`TestSummary`] field next to the derived
//! `status` and `pass_rate`. It is never truncated.

use serde::Serialize;
use tally_formats::{RunStatus, TestSummary};

#[derive(Serialize)]
struct JsonSummary<'a> {
    status: RunStatus,
    pass_rate: f64,
    #[serde(flatten)]
    summary: &'a TestSummary,
}

/// Serialize a summary as pretty-printed JSON (2-space indentation)
///
/// # Errors
///
/// Returns an error if serialization fails, which only happens for
/// non-string map keys and so never for a `TestSummary`.
pub fn to_json(summary: &TestSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonSummary {
        status: summary.status(),
        pass_rate: summary.pass_rate(),
        summary,
    })
}
