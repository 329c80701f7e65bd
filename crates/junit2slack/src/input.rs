// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report loading
//!
//! Reads and parses every report path given on the command line. A bad file
//! never stops the others from being processed: each problem is recorded in
//! the returned [`LoadOutcome`] for the caller to report.

use std::path::{Path, PathBuf};

use thiserror::Error;

use junit2slack_report::{ReportError, SuiteCollection};

/// Problems with a single input file
#[derive(Debug, Error)]
pub enum InputError {
    /// The path does not exist
    #[error("{} doesn't exist", .path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// The path could not be checked for existence
    #[error("error while trying to find {}: {source}", .path.display())]
    Inaccessible {
        /// The path being checked
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file exists but could not be read
    #[error("error while reading {}: {source}", .path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not a valid JUnit report
    #[error("error while parsing junit suites in {}: {source}", .path.display())]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// Parser error
        source: ReportError,
    },
}

impl InputError {
    /// The path the error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Inaccessible { path, .. }
            | Self::Read { path, .. }
            | Self::Parse { path, .. } => path,
        }
    }
}

/// Result of loading a batch of report files
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Parsed reports, in argument order
    pub collections: Vec<SuiteCollection>,
    /// Files that were skipped, in argument order
    pub errors: Vec<InputError>,
}

impl LoadOutcome {
    /// Whether every file was loaded
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Load a single report file
///
/// # Errors
///
/// Returns an [`InputError`] describing why the file could not be used.
pub fn load_file(path: &Path) -> Result<SuiteCollection, InputError> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(InputError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(InputError::Inaccessible {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let data = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    junit2slack_report::parse_bytes(&data).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every report in `paths`, keeping going past bad files
pub fn load<I, P>(paths: I) -> LoadOutcome
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut outcome = LoadOutcome::default();

    for path in paths {
        match load_file(path.as_ref()) {
            Ok(collection) => outcome.collections.push(collection),
            Err(e) => outcome.errors.push(e),
        }
    }

    outcome
}
