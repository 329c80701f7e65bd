// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for junit2slack-report

use thiserror::Error;

/// Errors that can occur while parsing a JUnit report
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The XML does not match the JUnit report structure
    #[error("JUnit structure error: {0}")]
    Deserialize(#[from] quick_xml::de::DeError),

    /// The report bytes are not valid UTF-8
    #[error("Report is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document has no root element
    #[error("Report contains no XML elements")]
    Empty,

    /// The root element is neither `<testsuites>` nor `<testsuite>`
    #[error("Unexpected root element <{name}>, expected <testsuites> or <testsuite>")]
    UnexpectedRoot {
        /// Local name of the root element that was found
        name: String,
    },
}
