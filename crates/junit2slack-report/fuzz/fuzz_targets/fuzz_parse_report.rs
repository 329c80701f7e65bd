// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for JUnit report parsing
//!
//! This fuzzes `parse_bytes`, which checks UTF-8, detects the document root
//! and deserializes the suite/result model.

#![no_main]

use libfuzzer_sys::fuzz_target;

use junit2slack_report::parse_bytes;

fuzz_target!(|data: &[u8]| {
    // parse_bytes should never panic on any input
    let _ = parse_bytes(data);
});
