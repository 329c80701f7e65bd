// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML parsing
//!
//! Test runners disagree on the document root: most emit a `<testsuites>`
//! wrapper, while some (surefire, pytest in single-suite mode) emit a bare
//! `<testsuite>`. Both are accepted and normalised into a [`SuiteCollection`].
//!
//! The serde pass trims element text, so `<failure>` and `<error>` bodies are
//! read a second time with a raw reader and written back verbatim.
//!
//! # Example
//!
//! ```
//! use junit2slack_report::parser::parse;
//!
//! let xml = r#"<testsuite name="unit" failures="1">
//!   <testcase classname="math" name="adds"><failure message="1 != 2"/></testcase>
//! </testsuite>"#;
//! let report = parse(xml).unwrap();
//! assert_eq!(report.suites.len(), 1);
//! assert_eq!(report.failing_results(), 1);
//! ```

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::ReportError;
use crate::model::{Suite, SuiteCollection};

/// Root element kinds a JUnit report may start with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Suites,
    Suite,
}

/// Parse a JUnit XML document
///
/// # Errors
///
/// Returns `ReportError::Empty` if there is no root element,
/// `ReportError::UnexpectedRoot` if the root is not a JUnit element, and
/// `ReportError::Xml` / `ReportError::Deserialize` for malformed documents.
pub fn parse(xml: &str) -> Result<SuiteCollection, ReportError> {
    let root = detect_root(xml)?;
    let mut collection = match root {
        Root::Suites => quick_xml::de::from_str(xml)?,
        Root::Suite => {
            let suite: Suite = quick_xml::de::from_str(xml)?;
            SuiteCollection::new(vec![suite])
        }
    };

    let bodies = raw_bodies(xml, root)?;
    for (suite, cases) in collection.suites.iter_mut().zip(bodies) {
        for (result, raw) in suite.results.iter_mut().zip(cases) {
            if let (Some(failure), Some(value)) = (result.failure.as_mut(), raw.failure) {
                failure.value = value;
            }
            if let (Some(error), Some(value)) = (result.error.as_mut(), raw.error) {
                error.value = value;
            }
        }
    }

    Ok(collection)
}

/// Parse a JUnit XML document from raw bytes
///
/// # Errors
///
/// Returns `ReportError::Utf8` if the bytes are not UTF-8, otherwise the same
/// errors as [`parse`].
pub fn parse_bytes(data: &[u8]) -> Result<SuiteCollection, ReportError> {
    parse(std::str::from_utf8(data)?)
}

/// Find the first element of the document and classify it
fn detect_root(xml: &str) -> Result<Root, ReportError> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return match e.local_name().as_ref() {
                    b"testsuites" => Ok(Root::Suites),
                    b"testsuite" => Ok(Root::Suite),
                    other => Err(ReportError::UnexpectedRoot {
                        name: String::from_utf8_lossy(other).into_owned(),
                    }),
                };
            }
            Event::Eof => return Err(ReportError::Empty),
            // Declarations, comments, doctypes and whitespace precede the root
            _ => {}
        }
    }
}

/// Untrimmed `<failure>` and `<error>` bodies of one test case
#[derive(Debug, Default)]
struct CaseBodies {
    failure: Option<String>,
    error: Option<String>,
}

/// Which body of a test case is being read
#[derive(Debug, Clone, Copy)]
enum BodyKind {
    Failure,
    Error,
}

impl CaseBodies {
    fn slot(&mut self, kind: BodyKind) -> &mut Option<String> {
        match kind {
            BodyKind::Failure => &mut self.failure,
            BodyKind::Error => &mut self.error,
        }
    }
}

fn body_kind(name: &[u8]) -> Option<BodyKind> {
    match name {
        b"failure" => Some(BodyKind::Failure),
        b"error" => Some(BodyKind::Error),
        _ => None,
    }
}

/// Collect the verbatim failure and error bodies of every test case
///
/// The result is indexed the same way as the deserialized model: one entry
/// per top-level suite, one per test case inside it. Only the first body of
/// each kind in a test case is kept.
fn raw_bodies(xml: &str, root: Root) -> Result<Vec<Vec<CaseBodies>>, ReportError> {
    let suite_depth = match root {
        Root::Suites => 1,
        Root::Suite => 0,
    };

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut suites: Vec<Vec<CaseBodies>> = Vec::new();
    let mut current: Option<(BodyKind, String)> = None;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name().as_ref().to_vec();
                let depth = path.len();
                let in_suite = path
                    .get(suite_depth)
                    .is_some_and(|n| n.as_slice() == b"testsuite");
                let in_case = in_suite
                    && depth == suite_depth + 2
                    && path[suite_depth + 1].as_slice() == b"testcase";

                let body = if in_case { body_kind(&name) } else { None };

                if depth == suite_depth && name.as_slice() == b"testsuite" {
                    suites.push(Vec::new());
                } else if in_suite && depth == suite_depth + 1 && name.as_slice() == b"testcase" {
                    if let Some(cases) = suites.last_mut() {
                        cases.push(CaseBodies::default());
                    }
                }

                match (&event, body) {
                    (Event::Start(_), Some(kind)) => current = Some((kind, String::new())),
                    (Event::Empty(_), Some(kind)) => store_body(&mut suites, kind, String::new()),
                    _ => {}
                }
                if matches!(event, Event::Start(_)) {
                    path.push(name);
                }
            }
            Event::End(_) => {
                path.pop();
                if path.len() == suite_depth + 2 {
                    if let Some((kind, body)) = current.take() {
                        store_body(&mut suites, kind, body);
                    }
                }
            }
            Event::Text(t) if path.len() == suite_depth + 3 => {
                if let Some((_, body)) = current.as_mut() {
                    body.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) if path.len() == suite_depth + 3 => {
                if let Some((_, body)) = current.as_mut() {
                    body.push_str(&c.decode().map_err(quick_xml::Error::from)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(suites)
}

fn store_body(suites: &mut [Vec<CaseBodies>], kind: BodyKind, body: String) {
    if let Some(case) = suites.last_mut().and_then(|cases| cases.last_mut()) {
        let slot = case.slot(kind);
        if slot.is_none() {
            *slot = Some(body);
        }
    }
}
