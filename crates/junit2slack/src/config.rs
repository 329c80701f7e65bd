// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the junit2slack command
//!
//! This module provides the command-line interface: the report files to read,
//! how many failures to include in the digest, output formatting and logging
//! options.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::digest::StopPolicy;

/// junit2slack - Turn JUnit reports into a Slack digest of failing tests
///
/// Reads one or more JUnit XML files and prints a JSON array of Slack
/// attachments to stdout. Diagnostics go to stderr.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "junit2slack")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// JUnit XML report files to read
    ///
    /// Files that are missing or fail to parse are reported and skipped.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Stop after this many failure attachments
    ///
    /// Without this flag (or --all-failures) traversal ends at the first
    /// failure with content.
    #[arg(short, long, env = "JUNIT2SLACK_MAX_FAILURES", value_name = "N")]
    pub max_failures: Option<NonZeroUsize>,

    /// Include an attachment for every failure
    #[arg(long, default_value = "false", conflicts_with = "max_failures")]
    pub all_failures: bool,

    /// Pretty-print the JSON output
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the JSON on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoInputFiles` if no report file was given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.files.is_empty() {
            return Err(ConfigError::NoInputFiles);
        }
        Ok(())
    }

    /// Get the stop policy selected by the failure-count flags
    #[must_use]
    pub fn stop_policy(&self) -> StopPolicy {
        if self.all_failures {
            StopPolicy::Unbounded
        } else if let Some(max) = self.max_failures {
            StopPolicy::Limit(max)
        } else {
            StopPolicy::default()
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No report files were passed
    #[error("requires at least one junit xml file")]
    NoInputFiles,
}
