// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure digest engine
//!
//! Turns parsed JUnit reports into Slack attachments describing the failing
//! tests. Nothing in here performs I/O or logs: outcomes that the caller may
//! want to report, such as skipped failures, are returned in [`Digest`].

pub mod assemble;
pub mod blocks;
pub mod extract;
pub mod title;
pub mod truncate;

pub use assemble::{Assembler, Digest, SkipReason, SkippedFailure, StopPolicy, assemble};
pub use blocks::failure_blocks;
pub use extract::{FailingResult, failing_results};
pub use title::title;
pub use truncate::{TEXT_LIMIT, truncate};
