// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Structured fuzz target for TAP parsing
//!
//! Generates well-formed TAP streams and checks that the plan stays
//! authoritative and every result line becomes a test case.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use tally_formats::parsers::tap;

#[derive(Debug, Arbitrary)]
enum Directive {
    None,
    Skip,
    Todo,
}

#[derive(Debug, Arbitrary)]
struct ResultLine {
    ok: bool,
    description: String,
    directive: Directive,
}

#[derive(Debug, Arbitrary)]
struct TapStream {
    plan: Option<u16>,
    results: Vec<ResultLine>,
}

fuzz_target!(|stream: TapStream| {
    let mut text = String::new();
    if let Some(plan) = stream.plan {
        text.push_str(&format!("1..{plan}\n"));
    }
    for (i, result) in stream.results.iter().enumerate() {
        let description: String = result
            .description
            .chars()
            .filter(|c| *c != '\n' && *c != '\r' && *c != '#')
            .collect();
        let directive = match result.directive {
            Directive::None => "",
            Directive::Skip => " # SKIP",
            Directive::Todo => " # TODO",
        };
        let outcome = if result.ok { "ok" } else { "not ok" };
        text.push_str(&format!("{outcome} {} - {description}{directive}\n", i + 1));
    }

    let summary = tap::parse(&text);
    assert_eq!(summary.test_cases.len(), stream.results.len());
    match stream.plan {
        Some(plan) => assert_eq!(summary.total, i64::from(plan)),
        None => assert_eq!(summary.total, stream.results.len() as i64),
    }
});
