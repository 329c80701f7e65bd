// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! junit2slack library
//!
//! This module exports the digest engine, the Slack message model and the
//! command's input/output plumbing for use in integration tests and as a
//! library.

pub mod config;
pub mod digest;
pub mod input;
pub mod output;
pub mod slack;
