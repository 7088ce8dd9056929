// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tally-formats: Test result parsing for tally
//!
//! This library crate detects and parses test-run output (JUnit XML, pytest
//! JSON, Go, npm/Jest, TAP and unstructured text) into a normalized
//! [`TestSummary`].
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tally_formats::{Format, parse_results, parse_str};
//!
//! // Parse a file, detecting its format
//! let summary = parse_results(Path::new("results.xml"), None).unwrap();
//!
//! // Or parse text you already have
//! let summary = parse_str(Format::Tap, "1..1\nok 1 - works\n").unwrap();
//! assert_eq!(summary.passed, 1);
//! ```

pub mod detect;
pub mod error;
pub mod format;
pub mod model;
pub mod parse;
pub mod parsers;

pub use detect::detect_format;
pub use error::FormatError;
pub use format::Format;
pub use model::{ManualCounts, RunStatus, TestCase, TestStatus, TestSummary};
pub use parse::{parse_file, parse_results, parse_str};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::FormatError;
    pub use crate::format::Format;
    pub use crate::model::{RunStatus, TestCase, TestStatus, TestSummary};
    pub use crate::parse::{parse_results, parse_str};
}
