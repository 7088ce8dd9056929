// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML reports
//!
//! The root element is either `<testsuites>` (every nested `<testsuite>` is
//! aggregated) or a single `<testsuite>`. Any other root yields an empty
//! summary. Suite attributes provide the counters; `<testcase>` children
//! provide the individual cases.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::FormatError;
use crate::format::Format;
use crate::model::{TestCase, TestStatus, TestSummary, non_negative};

const TAG_REPORT: &[u8] = b"testsuites";
const TAG_TEST_SUITE: &[u8] = b"testsuite";
const TAG_TEST_CASE: &[u8] = b"testcase";
const TAG_FAILURE: &[u8] = b"failure";
const TAG_ERROR: &[u8] = b"error";
const TAG_SKIPPED: &[u8] = b"skipped";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailKind {
    Failure,
    Error,
    Skipped,
}

/// An open element, innermost last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Report,
    Suite,
    Case,
    /// A status child of a test case; `true` if it is the first of its kind
    /// and its text should be captured
    Detail(DetailKind, bool),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Pending,
    Accepted,
    Ignored,
}

#[derive(Debug, Default)]
struct Detail {
    message: String,
    text: String,
}

#[derive(Debug)]
struct OpenCase {
    case: TestCase,
    failure: Option<Detail>,
    error: Option<Detail>,
    skipped: Option<Detail>,
}

impl OpenCase {
    fn detail_mut(&mut self, kind: DetailKind) -> &mut Option<Detail> {
        match kind {
            DetailKind::Failure => &mut self.failure,
            DetailKind::Error => &mut self.error,
            DetailKind::Skipped => &mut self.skipped,
        }
    }

    /// A failure wins over an error, which wins over a skip
    fn finish(self) -> TestCase {
        let Self {
            case,
            failure,
            error,
            skipped,
        } = self;

        if let Some(detail) = failure {
            let mut case = case.with_message(detail.message).with_output(detail.text);
            case.status = TestStatus::Failed;
            case
        } else if let Some(detail) = error {
            let mut case = case.with_message(detail.message).with_output(detail.text);
            case.status = TestStatus::Error;
            case
        } else if let Some(detail) = skipped {
            let mut case = case.with_message(detail.message);
            case.status = TestStatus::Skipped;
            case
        } else {
            case
        }
    }
}

struct JunitReader {
    summary: TestSummary,
    stack: Vec<Node>,
    root: Root,
    current_case: Option<OpenCase>,
}

impl JunitReader {
    fn new() -> Self {
        Self {
            summary: TestSummary::new(Format::Junit),
            stack: Vec::new(),
            root: Root::Pending,
            current_case: None,
        }
    }

    fn open(&mut self, e: &BytesStart<'_>) -> Result<(), FormatError> {
        // Only the text before a detail's first child element is kept
        if let Some(Node::Detail(_, capturing)) = self.stack.last_mut() {
            *capturing = false;
        }
        let node = self.classify(e)?;
        self.stack.push(node);
        Ok(())
    }

    fn classify(&mut self, e: &BytesStart<'_>) -> Result<Node, FormatError> {
        let qname = e.name();
        let name = qname.as_ref();

        if self.stack.is_empty() {
            if self.root != Root::Pending {
                return Err(FormatError::malformed_xml("junk after document element"));
            }
            return match name {
                TAG_REPORT => {
                    self.root = Root::Accepted;
                    Ok(Node::Report)
                }
                TAG_TEST_SUITE => {
                    self.root = Root::Accepted;
                    self.open_suite(e)?;
                    Ok(Node::Suite)
                }
                _ => {
                    self.root = Root::Ignored;
                    Ok(Node::Other)
                }
            };
        }

        if self.root == Root::Ignored {
            return Ok(Node::Other);
        }

        match name {
            TAG_TEST_SUITE if self.stack[0] == Node::Report => {
                self.open_suite(e)?;
                Ok(Node::Suite)
            }
            TAG_TEST_CASE if self.current_case.is_none() && self.in_suite() => {
                self.open_case(e)?;
                Ok(Node::Case)
            }
            TAG_FAILURE | TAG_ERROR | TAG_SKIPPED if self.stack.last() == Some(&Node::Case) => {
                let kind = match name {
                    TAG_FAILURE => DetailKind::Failure,
                    TAG_ERROR => DetailKind::Error,
                    _ => DetailKind::Skipped,
                };
                Ok(Node::Detail(kind, self.open_detail(kind, e)?))
            }
            _ => Ok(Node::Other),
        }
    }

    fn in_suite(&self) -> bool {
        self.stack.contains(&Node::Suite)
    }

    fn open_suite(&mut self, e: &BytesStart<'_>) -> Result<(), FormatError> {
        let summary = &mut self.summary;
        summary.total = summary.total.saturating_add(count_attr(e, "tests")?);
        summary.failed = summary.failed.saturating_add(count_attr(e, "failures")?);
        summary.errors = summary.errors.saturating_add(count_attr(e, "errors")?);
        summary.skipped = summary.skipped.saturating_add(count_attr(e, "skipped")?);
        // An overflowing sum is dropped rather than stored as infinity
        summary.duration = non_negative(summary.duration + seconds_attr(e, "time")?);
        Ok(())
    }

    fn open_case(&mut self, e: &BytesStart<'_>) -> Result<(), FormatError> {
        let name = string_attr(e, "name")?.unwrap_or_default();
        let case = TestCase::new(name, TestStatus::Passed)
            .with_classname(string_attr(e, "classname")?.unwrap_or_default())
            .with_duration(seconds_attr(e, "time")?);

        self.current_case = Some(OpenCase {
            case,
            failure: None,
            error: None,
            skipped: None,
        });
        Ok(())
    }

    /// Record a status child; returns whether it is the first of its kind
    fn open_detail(&mut self, kind: DetailKind, e: &BytesStart<'_>) -> Result<bool, FormatError> {
        let message = string_attr(e, "message")?.unwrap_or_default();
        let Some(open) = self.current_case.as_mut() else {
            return Ok(false);
        };
        let slot = open.detail_mut(kind);
        if slot.is_some() {
            return Ok(false);
        }
        *slot = Some(Detail {
            message,
            text: String::new(),
        });
        Ok(true)
    }

    fn text(&mut self, text: &str) -> Result<(), FormatError> {
        match self.stack.last() {
            None if !text.trim().is_empty() => {
                Err(FormatError::malformed_xml("text outside of the document element"))
            }
            Some(Node::Detail(kind, true)) if *kind != DetailKind::Skipped => {
                let kind = *kind;
                if let Some(detail) = self
                    .current_case
                    .as_mut()
                    .and_then(|open| open.detail_mut(kind).as_mut())
                {
                    detail.text.push_str(text);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn close(&mut self) {
        if self.stack.pop() == Some(Node::Case) {
            if let Some(open) = self.current_case.take() {
                self.summary.test_cases.push(open.finish());
            }
        }
    }

    fn finish(mut self) -> Result<TestSummary, FormatError> {
        if let Some(node) = self.stack.last() {
            return Err(FormatError::malformed_xml(format!(
                "unclosed element at end of document ({} open, innermost {:?})",
                self.stack.len(),
                node
            )));
        }
        if self.root == Root::Pending {
            return Err(FormatError::malformed_xml("no element found"));
        }

        // Derived from the suite attributes, so it goes negative when those
        // disagree with each other.
        let summary = &mut self.summary;
        summary.passed = summary
            .total
            .saturating_sub(summary.failed)
            .saturating_sub(summary.errors)
            .saturating_sub(summary.skipped);
        Ok(self.summary)
    }
}

/// Parse a JUnit XML document
///
/// # Errors
///
/// Returns `FormatError::MalformedXml` if the document is not well-formed or a
/// numeric attribute cannot be parsed.
pub fn parse(content: &str) -> Result<TestSummary, FormatError> {
    let mut reader = Reader::from_str(content.trim_start_matches('\u{feff}'));
    let mut junit = JunitReader::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            FormatError::malformed_xml(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;
        match event {
            Event::Start(e) => junit.open(&e)?,
            Event::Empty(e) => {
                junit.open(&e)?;
                junit.close();
            }
            Event::End(_) => junit.close(),
            Event::Text(e) => junit.text(&unescape(&e)?)?,
            Event::CData(e) => junit.text(&String::from_utf8_lossy(&e.into_inner()))?,
            Event::Eof => break,
            _ => {}
        }
    }

    let summary = junit.finish()?;
    debug!(
        total = summary.total,
        failed = summary.failed,
        errors = summary.errors,
        skipped = summary.skipped,
        cases = summary.test_cases.len(),
        "Parsed JUnit XML"
    );
    Ok(summary)
}

fn unescape(e: &BytesText<'_>) -> Result<String, FormatError> {
    e.unescape()
        .map(|text| text.into_owned())
        .map_err(|err| FormatError::malformed_xml(err.to_string()))
}

fn string_attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, FormatError> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|err| FormatError::malformed_xml(err.to_string()))?;
    attr.map(|attr| {
        attr.unescape_value()
            .map(|value| value.into_owned())
            .map_err(|err| FormatError::malformed_xml(err.to_string()))
    })
    .transpose()
}

fn count_attr(e: &BytesStart<'_>, name: &str) -> Result<i64, FormatError> {
    match string_attr(e, name)? {
        Some(value) if !value.trim().is_empty() => value.trim().parse().map_err(|_| {
            FormatError::malformed_xml(format!("invalid integer in attribute {name}: {value:?}"))
        }),
        _ => Ok(0),
    }
}

fn seconds_attr(e: &BytesStart<'_>, name: &str) -> Result<f64, FormatError> {
    match string_attr(e, name)? {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<f64>()
            .map(|secs| if secs.is_finite() { secs.max(0.0) } else { 0.0 })
            .map_err(|_| {
                FormatError::malformed_xml(format!("invalid number in attribute {name}: {value:?}"))
            }),
        _ => Ok(0.0),
    }
}
