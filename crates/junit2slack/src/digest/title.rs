// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Display titles for failing tests

use junit2slack_report::TestResult;

/// `"{class}: {name}"`, or just the name when the result has no class
#[must_use]
pub fn title(result: &TestResult) -> String {
    if result.class_name.is_empty() {
        result.name.clone()
    } else {
        format!("{}: {}", result.class_name, result.name)
    }
}
