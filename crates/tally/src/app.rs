// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! One tally invocation: load a summary, render it, write it out

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use tally_formats::{RunStatus, TestSummary, parse_results};
use tally_report::{render_markdown, to_json};
use tracing::{info, warn};

use crate::config::{Config, Input, MarkdownSink};
use crate::output::{append_outputs, append_step_summary, write_markdown_file};

/// Run tally with `config`, printing reports to `stdout`
///
/// JSON mode only prints the JSON document; otherwise Markdown goes to the
/// configured sink and step outputs are appended when GitHub Actions
/// provides an outputs file.
///
/// # Errors
///
/// Returns an error if the results file is missing or malformed, or if a
/// destination cannot be written.
pub fn run<W: Write>(config: &Config, stdout: &mut W) -> anyhow::Result<RunStatus> {
    let mut summary = load_summary(config)?;
    summary.title = config.title.clone();
    summary.timestamp = Some(Utc::now());
    let status = summary.status();

    if config.json {
        let json = to_json(&summary).context("Failed to serialize summary")?;
        writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        return Ok(status);
    }

    let markdown = render_markdown(&summary, &config.render_options());
    match config.markdown_sink() {
        MarkdownSink::File(path) => write_markdown_file(&path, &markdown)?,
        MarkdownSink::StepSummary(path) => append_step_summary(&path, &markdown)?,
        MarkdownSink::Stdout => {
            if config.github_summary {
                warn!("--github-summary given but GITHUB_STEP_SUMMARY is not set, printing to stdout");
            }
            writeln!(stdout, "{markdown}").context("Failed to write to stdout")?;
        }
    }

    match config.outputs_file() {
        Some(path) => append_outputs(&path, &summary)?,
        None if config.github_outputs => {
            warn!("--github-outputs given but GITHUB_OUTPUT is not set, skipping outputs");
        }
        None => {}
    }

    info!(
        status = status.as_str(),
        passed = summary.passed,
        failed = summary.failed,
        total = summary.total,
        "Summary generated"
    );
    Ok(status)
}

/// Process exit code for a run status: 1 when the run failed, otherwise 0
#[must_use]
pub fn exit_code(status: RunStatus) -> u8 {
    match status {
        RunStatus::Failed => 1,
        RunStatus::Passed | RunStatus::Unknown => 0,
    }
}

fn load_summary(config: &Config) -> anyhow::Result<TestSummary> {
    match config.input() {
        Input::File { path, format } => {
            parse_results(&path, format).context("Error parsing results")
        }
        Input::Manual(counts) => Ok(TestSummary::manual(counts)),
    }
}
