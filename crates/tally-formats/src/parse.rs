// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Loading results from disk

use std::path::Path;

use tracing::{debug, info};

use crate::detect::detect_format;
use crate::error::FormatError;
use crate::format::Format;
use crate::model::TestSummary;

/// Parse already-loaded content with the parser for `format`
///
/// # Errors
///
/// Returns `FormatError::MalformedXml` or `FormatError::MalformedJson` when a
/// structured document cannot be decoded. Textual formats never fail.
pub fn parse_str(format: Format, content: &str) -> Result<TestSummary, FormatError> {
    (format.parser())(content)
}

/// Read a results file and parse it as `format`
///
/// # Errors
///
/// Returns `FormatError::Io` if the file cannot be read as UTF-8 text, or any
/// error produced by the format's parser.
pub fn parse_file(path: &Path, format: Format) -> Result<TestSummary, FormatError> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), format = %format, "Read results file");
    parse_str(format, &content)
}

/// Parse a results file, detecting its format when `requested` is `None`
///
/// # Errors
///
/// Returns `FormatError::InputNotFound` if the path does not exist, otherwise
/// whatever [`parse_file`] returns.
pub fn parse_results(path: &Path, requested: Option<Format>) -> Result<TestSummary, FormatError> {
    if !path.exists() {
        return Err(FormatError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = requested.unwrap_or_else(|| detect_format(path));
    let summary = parse_file(path, format)?;
    info!(
        path = %path.display(),
        format = %summary.format_detected,
        total = summary.total,
        status = summary.status().as_str(),
        "Parsed test results"
    );
    Ok(summary)
}
