// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Format auto-detection
//!
//! The file extension decides for `.xml` and `.json`; anything else is
//! sniffed from its first lines. Detection never fails: unreadable files
//! and unrecognized content fall through to [`Format::Generic`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::format::Format;

/// Number of leading lines inspected when sniffing content
pub const SNIFF_LINES: usize = 10;

static TAP_PLAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^1\.\.\d+").expect("invalid tap plan regex"));

/// Detect the format of a results file
#[must_use]
pub fn detect_format(path: &Path) -> Format {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("xml") => Format::Junit,
        Some("json") => Format::PytestJson,
        _ => match read_head(path) {
            Some(head) => sniff(&head),
            None => Format::Generic,
        },
    };
    debug!(path = %path.display(), format = %format, "Detected results format");
    format
}

/// Guess a format from the leading lines of a file
#[must_use]
pub fn sniff(head: &str) -> Format {
    let trimmed = head.trim();
    if trimmed.starts_with("<?xml") {
        Format::Junit
    } else if trimmed.starts_with('{') {
        Format::PytestJson
    } else if head.contains("=== RUN") || head.contains("--- PASS") {
        Format::Go
    } else if head.contains("Tests:") || head.contains("PASS ") {
        Format::Npm
    } else if TAP_PLAN.is_match(head) {
        Format::Tap
    } else {
        Format::Generic
    }
}

/// Read up to [`SNIFF_LINES`] lines, keeping their line endings
fn read_head(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut head = String::new();
    for _ in 0..SNIFF_LINES {
        match reader.read_line(&mut head) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Could not sniff results file");
                return None;
            }
        }
    }
    Some(head)
}
