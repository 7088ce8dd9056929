// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the textual parsers and content sniffing
//!
//! These parsers accept any text, so besides not panicking they must never
//! report negative counters.

#![no_main]

use libfuzzer_sys::fuzz_target;

use tally_formats::detect::sniff;
use tally_formats::parsers::{generic, go, npm, tap};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = sniff(input);

        for summary in [
            generic::parse(input),
            go::parse(input),
            npm::parse(input),
            tap::parse(input),
        ] {
            assert!(summary.passed >= 0 && summary.failed >= 0);
            assert!(summary.skipped >= 0 && summary.errors >= 0);
            assert!(summary.total >= 0);
        }
    }
});
