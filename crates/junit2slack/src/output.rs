// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON rendering of the digest

use crate::slack::Attachment;

/// Render the payload as a JSON array
///
/// # Errors
///
/// Returns the serializer error if the payload cannot be encoded.
pub fn render(payload: &[Attachment], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(payload)
    } else {
        serde_json::to_string(payload)
    }
}
