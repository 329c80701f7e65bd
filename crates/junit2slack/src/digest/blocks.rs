// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Block layout for a single failing test
//!
//! Every failure card starts with a header holding the test title, followed
//! by labelled sections for whatever details the report provides:
//!
//! | message | value | sections after the header                          |
//! |---------|-------|----------------------------------------------------|
//! | empty   | empty | none, the failure is skipped                       |
//! | empty   | set   | `*Info*`, value                                    |
//! | set     | empty | `*Message*`, message                               |
//! | set     | set   | `*Message*`, message, `*Additional Info*`, value   |
//!
//! Labels are mrkdwn so they render bold. Report content is plain text so
//! stray `*` or `_` in stack traces is shown as-is.

use crate::slack::Block;

/// Label above the failure message
pub const MESSAGE_LABEL: &str = "*Message*";
/// Label above the failure body when there is no message
pub const INFO_LABEL: &str = "*Info*";
/// Label above the failure body when a message is also shown
pub const ADDITIONAL_INFO_LABEL: &str = "*Additional Info*";

/// Build the blocks for one failure
///
/// Returns `None` when both `message` and `value` are empty, meaning there is
/// nothing worth a card of its own.
#[must_use]
pub fn failure_blocks(title: &str, message: &str, value: &str) -> Option<Vec<Block>> {
    if message.is_empty() && value.is_empty() {
        return None;
    }

    let mut blocks = vec![Block::header(title)];
    match (message.is_empty(), value.is_empty()) {
        (true, _) => {
            blocks.push(Block::mrkdwn_section(INFO_LABEL));
            blocks.push(Block::plain_section(value));
        }
        (false, true) => {
            blocks.push(Block::mrkdwn_section(MESSAGE_LABEL));
            blocks.push(Block::plain_section(message));
        }
        (false, false) => {
            blocks.push(Block::mrkdwn_section(MESSAGE_LABEL));
            blocks.push(Block::plain_section(message));
            blocks.push(Block::mrkdwn_section(ADDITIONAL_INFO_LABEL));
            blocks.push(Block::plain_section(value));
        }
    }

    Some(blocks)
}
