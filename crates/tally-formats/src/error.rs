// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for tally-formats

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or parsing test results
#[derive(Debug, Error)]
pub enum FormatError {
    /// The results file does not exist
    #[error("Results file not found: {}", .path.display())]
    InputNotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// Error reading the results file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JUnit document is not well-formed XML
    #[error("Failed to parse JUnit XML: {message}")]
    MalformedXml {
        /// Description of the XML error
        message: String,
    },

    /// The pytest report is not valid JSON
    #[error("Failed to parse pytest JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

impl FormatError {
    pub(crate) fn malformed_xml(message: impl Into<String>) -> Self {
        Self::MalformedXml {
            message: message.into(),
        }
    }
}
