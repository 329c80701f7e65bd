// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junit2slack-report: JUnit XML parsing for junit2slack
//!
//! This library crate turns JUnit XML reports into an ordered suite/result
//! model that the junit2slack digest engine walks to find failing tests.
//!
//! # Example
//!
//! ```no_run
//! use junit2slack_report::parse;
//!
//! let xml = std::fs::read_to_string("report.xml").unwrap();
//! let report = parse(&xml).unwrap();
//! println!("{} failing tests", report.failing_results());
//! ```

pub mod error;
pub mod model;
pub mod parser;

pub use error::ReportError;
pub use model::{Failure, Properties, Property, Skipped, Suite, SuiteCollection, TestResult};
pub use parser::{parse, parse_bytes};

