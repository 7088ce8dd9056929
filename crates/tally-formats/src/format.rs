// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Format tags and parser dispatch

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::model::TestSummary;
use crate::parsers::{generic, go, junit, npm, pytest, tap};

/// Signature shared by every format parser
pub type ParseFn = fn(&str) -> Result<TestSummary, FormatError>;

/// Identifies where a summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// JUnit XML (pytest, Java, etc.)
    Junit,
    /// pytest `--json-report` or report-log output
    PytestJson,
    /// `go test -v` output
    Go,
    /// npm / Jest console output
    Npm,
    /// Test Anything Protocol
    Tap,
    /// Unstructured text
    Generic,
    /// Counts supplied on the command line
    Manual,
    /// Not yet determined
    Unknown,
}

impl Format {
    /// Formats that can be selected for parsing
    pub const PARSEABLE: [Format; 6] = [
        Format::Junit,
        Format::PytestJson,
        Format::Go,
        Format::Npm,
        Format::Tap,
        Format::Generic,
    ];

    /// The tag used in reports and on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Junit => "junit",
            Format::PytestJson => "pytest-json",
            Format::Go => "go",
            Format::Npm => "npm",
            Format::Tap => "tap",
            Format::Generic => "generic",
            Format::Manual => "manual",
            Format::Unknown => "unknown",
        }
    }

    /// Look up a parseable format by tag, falling back to `Generic`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::PARSEABLE
            .into_iter()
            .find(|format| format.as_str() == tag)
            .unwrap_or(Format::Generic)
    }

    /// The parser that handles this format
    ///
    /// `Manual` and `Unknown` have no parser of their own and use the
    /// generic text scanner.
    #[must_use]
    pub fn parser(self) -> ParseFn {
        match self {
            Format::Junit => junit::parse,
            Format::PytestJson => pytest::parse,
            Format::Go => |content| Ok(go::parse(content)),
            Format::Npm => |content| Ok(npm::parse(content)),
            Format::Tap => |content| Ok(tap::parse(content)),
            Format::Generic | Format::Manual | Format::Unknown => {
                |content| Ok(generic::parse(content))
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
