// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Digest assembly
//!
//! Walks the failing results, builds one attachment per failure that has
//! something to show, and prepends an index attachment that lists the title of
//! every failing test seen, including those without their own card.
//!
//! # Example
//!
//! ```
//! use junit2slack::digest::assemble;
//! use junit2slack_report::{Failure, Suite, SuiteCollection, TestResult};
//!
//! let report = SuiteCollection::new(vec![Suite::new("unit").with_result(
//!     TestResult::new("adds").with_failure(Failure::new("1 != 2", "")),
//! )]);
//!
//! let payload = assemble([&report]);
//! assert_eq!(payload.len(), 2);
//! ```

use std::num::NonZeroUsize;

use junit2slack_report::SuiteCollection;

use crate::digest::blocks::failure_blocks;
use crate::digest::extract::failing_results;
use crate::digest::title::title as test_title;
use crate::digest::truncate::{TEXT_LIMIT, truncate};
use crate::slack::{Attachment, Block};

/// Heading of the index attachment
pub const INDEX_HEADER: &str = "Failed tests";

/// Threshold of the default [`StopPolicy::AtMost`] rule
pub const LEGACY_STOP_THRESHOLD: usize = 3;

/// When to stop collecting failure attachments
///
/// The policy is checked each time a failure attachment is added, with the
/// number of failure attachments collected so far (the index is not counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPolicy {
    /// Stop as soon as the count is at most `n`
    ///
    /// With any `n >= 1` this trips on the first failure attachment of any
    /// shape, so the digest carries a single failure card.
    AtMost(usize),
    /// Stop once `n` failure attachments have been collected
    Limit(NonZeroUsize),
    /// Collect every failure
    Unbounded,
}

impl StopPolicy {
    /// Whether traversal should stop with `count` failure attachments collected
    #[must_use]
    pub fn should_stop(&self, count: usize) -> bool {
        match self {
            Self::AtMost(n) => count <= *n,
            Self::Limit(n) => count >= n.get(),
            Self::Unbounded => false,
        }
    }
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self::AtMost(LEGACY_STOP_THRESHOLD)
    }
}

/// Why a failing test did not get an attachment of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Both the failure message and body were empty
    NoContent,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoContent => write!(f, "no failure message or value"),
        }
    }
}

/// A failing test listed in the index but without its own attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFailure {
    /// Title of the failing test
    pub title: String,
    /// Why it was skipped
    pub reason: SkipReason,
}

/// Outcome of one assembly run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digest {
    /// The payload: index attachment first, then one per failure
    pub attachments: Vec<Attachment>,
    /// Failures that only appear in the index
    pub skipped: Vec<SkippedFailure>,
    /// Number of failing results visited before traversal ended
    pub failures_seen: usize,
    /// Whether the stop policy ended traversal
    pub stopped_early: bool,
}

impl Digest {
    /// Whether there is nothing to report
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    /// Number of failure attachments, excluding the index
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.attachments.len().saturating_sub(1)
    }

    /// Take the payload
    #[must_use]
    pub fn into_attachments(self) -> Vec<Attachment> {
        self.attachments
    }
}

/// Builds digests under a fixed stop policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    stop_policy: StopPolicy,
}

impl Assembler {
    /// Create an assembler with the given stop policy
    #[must_use]
    pub fn new(stop_policy: StopPolicy) -> Self {
        Self { stop_policy }
    }

    /// The configured stop policy
    #[must_use]
    pub fn stop_policy(&self) -> StopPolicy {
        self.stop_policy
    }

    /// Build the digest for `collections`
    #[must_use]
    pub fn assemble<'a, I>(&self, collections: I) -> Digest
    where
        I: IntoIterator<Item = &'a SuiteCollection>,
    {
        let mut digest = Digest::default();
        let mut titles = Vec::new();

        for failing in failing_results(collections) {
            digest.failures_seen += 1;

            let title = test_title(failing.result);
            titles.push(Block::plain_section(title.as_str()));

            let message = truncate(&failing.failure.message, TEXT_LIMIT);
            let value = truncate(&failing.failure.value, TEXT_LIMIT);

            let Some(blocks) = failure_blocks(&title, message, value) else {
                digest.skipped.push(SkippedFailure {
                    title,
                    reason: SkipReason::NoContent,
                });
                continue;
            };

            digest.attachments.push(Attachment::failure(blocks));

            if self.stop_policy.should_stop(digest.attachments.len()) {
                digest.stopped_early = true;
                break;
            }
        }

        if titles.is_empty() {
            return digest;
        }

        let mut index = Vec::with_capacity(titles.len() + 1);
        index.push(Block::header(INDEX_HEADER));
        index.extend(titles);
        digest.attachments.insert(0, Attachment::failure(index));

        digest
    }
}

/// Build the payload for `collections` with the default stop policy
#[must_use]
pub fn assemble<'a, I>(collections: I) -> Vec<Attachment>
where
    I: IntoIterator<Item = &'a SuiteCollection>,
{
    Assembler::default().assemble(collections).into_attachments()
}
