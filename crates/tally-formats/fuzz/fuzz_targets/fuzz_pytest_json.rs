// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for pytest JSON report parsing

#![no_main]

use libfuzzer_sys::fuzz_target;

use tally_formats::parsers::pytest;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = pytest::parse(input);
    }
});
