//! tally: Summarize test results for CI
//!
//! This binary parses a test results file (or takes manual counts) and
//! writes a Markdown or JSON summary, exiting non-zero when tests failed.

use std::process::ExitCode;

use clap::Parser;
use tally::app;
use tally::config::Config;
use tracing::debug;

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Starting tally");

    let mut stdout = std::io::stdout().lock();
    match app::run(&config, &mut stdout) {
        Ok(status) => ExitCode::from(app::exit_code(status)),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
