// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for JUnit XML parsing

#![no_main]

use libfuzzer_sys::fuzz_target;

use tally_formats::parsers::junit;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Malformed documents must come back as errors, never panics
        let _ = junit::parse(input);
    }
});
