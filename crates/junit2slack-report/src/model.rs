// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit report types
//!
//! These mirror the subset of the JUnit XML schema that CI tools emit in
//! practice. Attributes are mapped with the `@` prefix and element text with
//! `$text`, following quick-xml's serde conventions. Anything not listed here
//! is ignored during parsing.
//!
//! Numeric attributes that are present but empty (`time=""`) read as zero.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Parse a numeric attribute, treating an empty value as the default
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(serde::de::Error::custom)
}

/// The contents of one JUnit report: an ordered list of suites
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuiteCollection {
    /// Suites in document order
    #[serde(rename = "testsuite", default)]
    pub suites: Vec<Suite>,
}

impl SuiteCollection {
    /// Create a collection from already-built suites
    #[must_use]
    pub fn new(suites: Vec<Suite>) -> Self {
        Self { suites }
    }

    /// Number of results carrying a `<failure>` across all suites
    #[must_use]
    pub fn failing_results(&self) -> usize {
        self.suites
            .iter()
            .flat_map(|s| s.results.iter())
            .filter(|r| r.failed())
            .count()
    }

    /// Whether the collection contains no suites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// A `<testsuite>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Suite {
    /// Suite name
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Number of tests the suite reports
    #[serde(rename = "@tests", default, deserialize_with = "empty_as_default")]
    pub tests: u32,
    /// Number of failures the suite reports
    #[serde(rename = "@failures", default, deserialize_with = "empty_as_default")]
    pub failures: u32,
    /// Number of errors the suite reports
    #[serde(rename = "@errors", default, deserialize_with = "empty_as_default")]
    pub errors: u32,
    /// Number of skipped tests the suite reports
    #[serde(rename = "@skipped", default, deserialize_with = "empty_as_default")]
    pub skipped: u32,
    /// Wall time in seconds
    #[serde(rename = "@time", default, deserialize_with = "empty_as_default")]
    pub time: f64,
    /// Suite-level properties
    #[serde(default)]
    pub properties: Option<Properties>,
    /// Test cases in document order
    #[serde(rename = "testcase", default)]
    pub results: Vec<TestResult>,
}

impl Suite {
    /// Create an empty suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a result, keeping the reported counts in step with it
    #[must_use]
    pub fn with_result(mut self, result: TestResult) -> Self {
        self.tests += 1;
        if result.failed() {
            self.failures += 1;
        }
        self.results.push(result);
        self
    }

    /// Override the reported failure count
    #[must_use]
    pub fn with_failures(mut self, failures: u32) -> Self {
        self.failures = failures;
        self
    }

    /// Whether the suite reports any failures
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }
}

/// A `<properties>` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Properties {
    /// Individual properties in document order
    #[serde(rename = "property", default)]
    pub entries: Vec<Property>,
}

/// A single `<property name=".." value=".."/>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Property {
    /// Property name
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Property value
    #[serde(rename = "@value", default)]
    pub value: String,
}

/// A `<testcase>` element
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TestResult {
    /// Test name
    #[serde(rename = "@name", default)]
    pub name: String,
    /// Class (or module) the test belongs to, may be empty
    #[serde(rename = "@classname", default)]
    pub class_name: String,
    /// Wall time in seconds
    #[serde(rename = "@time", default, deserialize_with = "empty_as_default")]
    pub time: f64,
    /// Failure details, present only when the test failed
    #[serde(default)]
    pub failure: Option<Failure>,
    /// Error details, present when the test errored
    #[serde(default)]
    pub error: Option<Failure>,
    /// Present when the test was skipped
    #[serde(default)]
    pub skipped: Option<Skipped>,
    /// Captured standard output
    #[serde(rename = "system-out", default)]
    pub system_out: Option<String>,
    /// Captured standard error
    #[serde(rename = "system-err", default)]
    pub system_err: Option<String>,
}

impl TestResult {
    /// Create a passing result
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the class name
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Attach failure details
    #[must_use]
    pub fn with_failure(mut self, failure: Failure) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Whether the result carries a `<failure>`
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// A `<failure>` (or `<error>`) element
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Failure {
    /// Short failure message from the `message` attribute
    #[serde(rename = "@message", default)]
    pub message: String,
    /// Failure type from the `type` attribute
    #[serde(rename = "@type", default)]
    pub kind: String,
    /// Element body, usually a stack trace or assertion diff
    #[serde(rename = "$text", default)]
    pub value: String,
}

impl Failure {
    /// Create a failure from its message and body
    #[must_use]
    pub fn new(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: String::new(),
            value: value.into(),
        }
    }
}

/// A `<skipped>` marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Skipped {
    /// Optional reason
    #[serde(rename = "@message", default)]
    pub message: String,
}
