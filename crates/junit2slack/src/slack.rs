// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Slack message types
//!
//! Only the parts of Slack's attachment and Block Kit schema that the digest
//! emits are modelled. Field order and names match what Slack's API and
//! existing consumers of the JSON expect.

use serde::{Deserialize, Serialize};

/// Color of every attachment in the digest (a muted red)
pub const FAILURE_COLOR: &str = "#bb2124";

/// A colored card holding an ordered list of blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Hex color shown on the attachment's side bar
    pub color: String,
    /// Blocks in display order
    pub blocks: Vec<Block>,
}

impl Attachment {
    /// Create an attachment with the failure color
    #[must_use]
    pub fn failure(blocks: Vec<Block>) -> Self {
        Self {
            color: FAILURE_COLOR.to_string(),
            blocks,
        }
    }
}

/// One Block Kit block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Large bold heading, plain text only
    Header {
        /// Heading text
        text: TextObject,
    },
    /// Body text
    Section {
        /// Section text
        text: TextObject,
    },
}

impl Block {
    /// Header block with plain text
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: TextObject::plain(text),
        }
    }

    /// Section block with plain text
    #[must_use]
    pub fn plain_section(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::plain(text),
        }
    }

    /// Section block with mrkdwn text
    #[must_use]
    pub fn mrkdwn_section(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    /// The block's text object
    #[must_use]
    pub fn text(&self) -> &TextObject {
        match self {
            Self::Header { text } | Self::Section { text } => text,
        }
    }
}

/// A Block Kit text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    /// How Slack should render `text`
    #[serde(rename = "type")]
    pub kind: TextKind,
    /// The text itself
    pub text: String,
}

impl TextObject {
    /// Text rendered verbatim
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }

    /// Text rendered with Slack's markdown dialect
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }
}

/// Text object kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    /// `plain_text`
    PlainText,
    /// `mrkdwn`
    Mrkdwn,
}
