// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Text length limits

/// Slack's limit for (non-field) text objects
pub const TEXT_LIMIT: usize = 3000;

/// Keep at most the first `limit` characters of `s`
///
/// No ellipsis is appended. Characters are Unicode scalar values, so the
/// result is always valid UTF-8.
#[must_use]
pub fn truncate(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
