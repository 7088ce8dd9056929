// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown rendering for GitHub Actions job summaries
//!
//! Reports are assembled line by line in a fixed order: title, badge, metrics
//! table, failed tests, passed tests and raw output. GitHub rejects step
//! summaries above [`MAX_SUMMARY_SIZE`], so the rendered text is cut back to
//! [`SAFE_SUMMARY_SIZE`] when it grows too large.

use tally_formats::{Format, RunStatus, TestCase, TestSummary};
use tracing::{debug, warn};

/// Hard limit GitHub enforces on a step summary (1 MiB)
pub const MAX_SUMMARY_SIZE: usize = 1_048_576;

/// Ceiling applied to every rendered report
pub const SAFE_SUMMARY_SIZE: usize = 1_000_000;

/// Line appended when a report had to be cut to fit
pub const SIZE_WARNING: &str = "> :warning: Output truncated due to size limits";

/// Bytes reserved below the ceiling for the size warning
const SIZE_WARNING_HEADROOM: usize = 100;

const MAX_FAILED_LISTED: usize = 20;
const MAX_PASSED_LISTED: usize = 50;
const MAX_MESSAGE_CHARS: usize = 200;

/// Options controlling which sections appear in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the failed-test list and the raw output block
    pub show_details: bool,
    /// Include the passed-test list
    pub show_passed: bool,
    /// Maximum raw output lines to include (0 = unlimited)
    pub max_lines: usize,
    /// Include the status badge under the title
    pub include_badge: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_details: false,
            show_passed: false,
            max_lines: 100,
            include_badge: true,
        }
    }
}

/// Format a duration in seconds for humans
///
/// Under a second is shown in milliseconds, under a minute in seconds with
/// two decimals, and anything longer as minutes plus seconds.
///
/// # Examples
///
/// ```
/// use tally_report::format_duration;
///
/// assert_eq!(format_duration(0.25), "250ms");
/// assert_eq!(format_duration(12.5), "12.50s");
/// assert_eq!(format_duration(125.0), "2m 5.0s");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{:.0}ms", seconds * 1000.0)
    } else if seconds < 60.0 {
        format!("{seconds:.2}s")
    } else {
        let minutes = (seconds / 60.0).floor() as u64;
        let remaining = seconds % 60.0;
        format!("{minutes}m {remaining:.1}s")
    }
}

/// Keep the first `max_lines` lines of `text`
///
/// Returns the kept prefix and whether anything was dropped. A limit of zero
/// keeps everything.
#[must_use]
pub fn truncate_lines(text: &str, max_lines: usize) -> (&str, bool) {
    if max_lines == 0 {
        return (text, false);
    }
    match text.match_indices('\n').nth(max_lines - 1) {
        Some((end, _)) => (&text[..end], true),
        None => (text, false),
    }
}

/// Render a summary as Markdown
///
/// The result never exceeds [`SAFE_SUMMARY_SIZE`] bytes.
#[must_use]
pub fn render_markdown(summary: &TestSummary, options: &RenderOptions) -> String {
    let lines = compose(summary, options);
    let markdown = lines.join("\n");
    if markdown.len() <= SAFE_SUMMARY_SIZE {
        debug!(bytes = markdown.len(), "Rendered markdown summary");
        return markdown;
    }

    warn!(
        bytes = markdown.len(),
        limit = SAFE_SUMMARY_SIZE,
        "Markdown summary too large, truncating"
    );
    fit_to_size(&lines)
}

fn compose(summary: &TestSummary, options: &RenderOptions) -> Vec<String> {
    let mut lines = vec![format!("## {}", summary.title), String::new()];

    if options.include_badge {
        let badge = match summary.status() {
            RunStatus::Passed => ":white_check_mark: **Passed**",
            RunStatus::Failed => ":x: **Failed**",
            RunStatus::Unknown => ":grey_question: **Unknown**",
        };
        lines.push(format!("**Status:** {badge}"));
        lines.push(String::new());
    }

    if summary.total > 0 {
        push_metrics(&mut lines, summary);
    } else {
        lines.push("> :warning: No test results found".to_string());
        lines.push(String::new());
    }

    if options.show_details {
        push_failed(&mut lines, summary);
    }
    if options.show_passed {
        push_passed(&mut lines, summary);
    }
    if options.show_details && !summary.raw_output.is_empty() {
        push_raw_output(&mut lines, &summary.raw_output, options.max_lines);
    }

    lines
}

fn push_metrics(lines: &mut Vec<String>, summary: &TestSummary) {
    lines.push("| Metric | Count |".to_string());
    lines.push("|--------|-------|".to_string());
    lines.push(format!("| :white_check_mark: Passed | {} |", summary.passed));
    lines.push(format!("| :x: Failed | {} |", summary.failed));
    if summary.errors > 0 {
        lines.push(format!("| :boom: Errors | {} |", summary.errors));
    }
    if summary.skipped > 0 {
        lines.push(format!("| :fast_forward: Skipped | {} |", summary.skipped));
    }
    lines.push(format!("| **Total** | **{}** |", summary.total));
    lines.push(String::new());

    if summary.duration > 0.0 {
        lines.push(format!("**Duration:** {}", format_duration(summary.duration)));
        lines.push(String::new());
    }

    lines.push(format!("**Pass Rate:** {:.1}%", summary.pass_rate()));
    lines.push(String::new());

    if summary.format_detected != Format::Unknown {
        lines.push(format!("*Format: {}*", summary.format_detected));
        lines.push(String::new());
    }
}

fn push_failed(lines: &mut Vec<String>, summary: &TestSummary) {
    let failed: Vec<&TestCase> = summary.failed_cases().collect();
    if failed.is_empty() {
        return;
    }

    lines.push("### Failed Tests".to_string());
    lines.push(String::new());
    for case in failed.iter().take(MAX_FAILED_LISTED) {
        lines.push(format!("- :x: `{}`", case.qualified_name()));
        if !case.message.is_empty() {
            lines.push(format!("  - {}", shorten(&case.message)));
        }
    }
    if failed.len() > MAX_FAILED_LISTED {
        lines.push(format!(
            "- ... and {} more failures",
            failed.len() - MAX_FAILED_LISTED
        ));
    }
    lines.push(String::new());
}

fn push_passed(lines: &mut Vec<String>, summary: &TestSummary) {
    let passed: Vec<&TestCase> = summary.passed_cases().collect();
    if passed.is_empty() {
        return;
    }

    lines.push("### Passed Tests".to_string());
    lines.push(String::new());
    for case in passed.iter().take(MAX_PASSED_LISTED) {
        let timing = if case.duration > 0.0 {
            format!(" ({})", format_duration(case.duration))
        } else {
            String::new()
        };
        lines.push(format!(
            "- :white_check_mark: `{}`{timing}",
            case.qualified_name()
        ));
    }
    if passed.len() > MAX_PASSED_LISTED {
        lines.push(format!(
            "- ... and {} more passed",
            passed.len() - MAX_PASSED_LISTED
        ));
    }
    lines.push(String::new());
}

fn push_raw_output(lines: &mut Vec<String>, raw_output: &str, max_lines: usize) {
    lines.push("### Output".to_string());
    lines.push(String::new());
    lines.push("```".to_string());

    let (kept, truncated) = truncate_lines(raw_output, max_lines);
    lines.extend(kept.split('\n').map(str::to_string));
    if truncated {
        let total = raw_output.split('\n').count();
        lines.push(String::new());
        lines.push(format!(
            "... (truncated, showing {max_lines} of {total} lines)"
        ));
    }

    lines.push("```".to_string());
    lines.push(String::new());
}

/// Truncate a failure message to its first characters
fn shorten(message: &str) -> String {
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((end, _)) => format!("{}...", &message[..end]),
        None => message.to_string(),
    }
}

/// Keep whole lines from the top until the size limit is reached
fn fit_to_size(lines: &[String]) -> String {
    let limit = SAFE_SUMMARY_SIZE - SIZE_WARNING_HEADROOM;
    let mut kept: Vec<&str> = Vec::new();
    let mut size = 0;
    for line in lines {
        let line_size = line.len() + 1;
        if size + line_size > limit {
            break;
        }
        kept.push(line);
        size += line_size;
    }
    kept.push("");
    kept.push(SIZE_WARNING);
    kept.join("\n")
}
