// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! tally-report: Rendering test summaries for CI
//!
//! This library crate turns a [`tally_formats::TestSummary`] into either a
//! size-bounded Markdown report suitable for a GitHub Actions job summary, or
//! a JSON document carrying every stored field plus the derived status and
//! pass rate.
//!
//! # Example
//!
//! ```
//! use tally_formats::{ManualCounts, TestSummary};
//! use tally_report::{RenderOptions, render_markdown};
//!
//! let summary = TestSummary::manual(ManualCounts {
//!     passed: 9,
//!     failed: 1,
//!     ..ManualCounts::default()
//! });
//! let markdown = render_markdown(&summary, &RenderOptions::default());
//! assert!(markdown.starts_with("## Test Results"));
//! ```

pub mod json;
pub mod markdown;

pub use json::to_json;
pub use markdown::{
    MAX_SUMMARY_SIZE, RenderOptions, SAFE_SUMMARY_SIZE, format_duration, render_markdown,
    truncate_lines,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::json::to_json;
    pub use crate::markdown::{RenderOptions, render_markdown};
}
