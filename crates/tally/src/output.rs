// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Output sinks
//!
//! Markdown goes to a file, to the GitHub step summary, or to stdout. GitHub
//! Actions step outputs are appended as `key=value` lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tally_formats::TestSummary;
use tracing::debug;

/// Output errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// A destination could not be opened or written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    fn write(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write Markdown to `path`, replacing any existing content
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be written.
pub fn write_markdown_file(path: &Path, markdown: &str) -> Result<(), OutputError> {
    std::fs::write(path, markdown).map_err(OutputError::write(path))?;
    debug!(path = %path.display(), bytes = markdown.len(), "Wrote markdown file");
    Ok(())
}

/// Append Markdown and a trailing newline to the step summary file
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be opened or written.
pub fn append_step_summary(path: &Path, markdown: &str) -> Result<(), OutputError> {
    append(path, &format!("{markdown}\n"))?;
    debug!(path = %path.display(), bytes = markdown.len(), "Appended step summary");
    Ok(())
}

/// Append the seven `key=value` output lines for `summary`
///
/// # Errors
///
/// Returns `OutputError::Write` if the file cannot be opened or written.
pub fn append_outputs(path: &Path, summary: &TestSummary) -> Result<(), OutputError> {
    append(path, &format_outputs(summary))?;
    debug!(path = %path.display(), "Appended step outputs");
    Ok(())
}

/// Render the step outputs for `summary`, one `key=value` per line
#[must_use]
pub fn format_outputs(summary: &TestSummary) -> String {
    format!(
        "status={}\npassed={}\nfailed={}\nskipped={}\ntotal={}\nduration={}\npass_rate={:.1}\n",
        summary.status().as_str(),
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.total,
        decimal(summary.duration),
        summary.pass_rate(),
    )
}

/// Plain decimal with at least one fractional digit
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn append(path: &Path, text: &str) -> Result<(), OutputError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(OutputError::write(path))?;
    file.write_all(text.as_bytes())
        .map_err(OutputError::write(path))
}
