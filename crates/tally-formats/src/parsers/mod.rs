// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-format parsers
//!
//! Each parser is a pure function from the file contents to a
//! [`TestSummary`](crate::model::TestSummary). Structured formats (JUnit,
//! pytest JSON) fail on malformed documents; the textual formats never fail
//! and simply leave counters at zero when nothing matches.

pub mod generic;
pub mod go;
pub mod junit;
pub mod npm;
pub mod pytest;
pub mod tap;

use regex::Captures;

/// Read a numeric capture group as a counter, `0` if absent or unparseable
fn capture_count(caps: &Captures<'_>, group: usize) -> i64 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Read a capture group as seconds, `0.0` if absent or unparseable
fn capture_seconds(caps: &Captures<'_>, group: usize) -> f64 {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|secs| secs.is_finite())
        .unwrap_or(0.0)
}
