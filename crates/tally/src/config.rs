//! Command-line configuration for tally
//!
//! This module defines the CLI surface and turns it into the inputs the rest
//! of the program works with: where results come from, where Markdown goes,
//! and how the report is shaped.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tally_formats::model::DEFAULT_TITLE;
use tally_formats::{Format, ManualCounts};
use tally_report::RenderOptions;

/// Summarize test results for CI job summaries
#[derive(Parser, Debug, Clone)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to a test results file
    ///
    /// When omitted, the report is built from the manual count options.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Format of the results file
    #[arg(short = 't', long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Number of passed tests (manual input)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub passed: Option<i64>,

    /// Number of failed tests (manual input)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub failed: Option<i64>,

    /// Number of skipped tests (manual input)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub skipped: Option<i64>,

    /// Number of test errors (manual input)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub errors: Option<i64>,

    /// Test duration in seconds (manual input)
    #[arg(long, value_parser = parse_seconds)]
    pub duration: Option<f64>,

    /// Title for the summary
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Show failed tests and the captured output
    #[arg(long, default_value = "false")]
    pub show_details: bool,

    /// Show the list of passed tests
    #[arg(long, default_value = "false")]
    pub show_passed: bool,

    /// Maximum lines of captured output to include (0 for unlimited)
    #[arg(long, default_value_t = 100)]
    pub max_lines: usize,

    /// Don't show the status badge
    #[arg(long, default_value = "false")]
    pub no_badge: bool,

    /// Write Markdown to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append Markdown to the GitHub step summary (automatic in Actions)
    #[arg(long, default_value = "false")]
    pub github_summary: bool,

    /// Append key=value outputs to GITHUB_OUTPUT (automatic in Actions)
    #[arg(long, default_value = "false")]
    pub github_outputs: bool,

    /// Print the summary as JSON instead of Markdown
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout only carries the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Step summary file provided by GitHub Actions
    #[arg(long, env = "GITHUB_STEP_SUMMARY", hide = true)]
    pub step_summary_path: Option<PathBuf>,

    /// Outputs file provided by GitHub Actions
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    pub outputs_path: Option<PathBuf>,
}

/// Values accepted by `--format`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    /// Detect from the file extension and content
    #[default]
    Auto,
    /// JUnit XML
    Junit,
    /// pytest JSON report or report log
    PytestJson,
    /// `go test -v` output
    Go,
    /// npm / Jest output
    Npm,
    /// Test Anything Protocol
    Tap,
    /// Unstructured text
    Generic,
}

impl FormatArg {
    /// The parser to force, or `None` to detect
    #[must_use]
    pub fn format(self) -> Option<Format> {
        match self {
            FormatArg::Auto => None,
            FormatArg::Junit => Some(Format::Junit),
            FormatArg::PytestJson => Some(Format::PytestJson),
            FormatArg::Go => Some(Format::Go),
            FormatArg::Npm => Some(Format::Npm),
            FormatArg::Tap => Some(Format::Tap),
            FormatArg::Generic => Some(Format::Generic),
        }
    }
}

/// Where the summary comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Parse a results file
    File {
        path: PathBuf,
        format: Option<Format>,
    },
    /// Build the summary from explicit counts
    Manual(ManualCounts),
}

/// Where rendered Markdown is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkdownSink {
    /// Overwrite a file
    File(PathBuf),
    /// Append to the GitHub step summary file
    StepSummary(PathBuf),
    /// Print to standard output
    Stdout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: None,
            format: FormatArg::Auto,
            passed: None,
            failed: None,
            skipped: None,
            errors: None,
            duration: None,
            title: DEFAULT_TITLE.to_string(),
            show_details: false,
            show_passed: false,
            max_lines: 100,
            no_badge: false,
            output: None,
            github_summary: false,
            github_outputs: false,
            json: false,
            verbose: false,
            quiet: false,
            step_summary_path: None,
            outputs_path: None,
        }
    }
}

impl Config {
    /// Get the input source
    ///
    /// A results file takes precedence; the manual counts are ignored when
    /// `--file` is given.
    #[must_use]
    pub fn input(&self) -> Input {
        match &self.file {
            Some(path) => Input::File {
                path: path.clone(),
                format: self.format.format(),
            },
            None => Input::Manual(ManualCounts {
                passed: self.passed.unwrap_or(0),
                failed: self.failed.unwrap_or(0),
                skipped: self.skipped.unwrap_or(0),
                errors: self.errors.unwrap_or(0),
                duration: self.duration.unwrap_or(0.0),
            }),
        }
    }

    /// Get the Markdown destination
    ///
    /// `--output` wins, then the step summary file when GitHub Actions
    /// provides one, then stdout.
    #[must_use]
    pub fn markdown_sink(&self) -> MarkdownSink {
        if let Some(path) = &self.output {
            return MarkdownSink::File(path.clone());
        }
        match non_empty(self.step_summary_path.as_ref()) {
            Some(path) => MarkdownSink::StepSummary(path),
            None => MarkdownSink::Stdout,
        }
    }

    /// Get the outputs file, if GitHub Actions provides one
    #[must_use]
    pub fn outputs_file(&self) -> Option<PathBuf> {
        non_empty(self.outputs_path.as_ref())
    }

    /// Get the rendering options
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_details: self.show_details,
            show_passed: self.show_passed,
            max_lines: self.max_lines,
            include_badge: !self.no_badge,
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

fn non_empty(path: Option<&PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty()).cloned()
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|e| format!("invalid number of seconds: {e}"))?;
    if seconds.is_finite() && seconds >= 0.0 {
        Ok(seconds)
    } else {
        Err(format!("duration must be a non-negative number, got {value}"))
    }
}
