//! Message type classification using prefix/suffix rules.
//!
//! Every message gets exactly one of three types. Rules are checked in a
//! fixed order: question, then request, then the sharing-info default.
//! Prefixes are literal: "what" also matches "whatever".

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Words that open a question.
pub const QUESTION_WORDS: &[&str] = &["what", "why", "how", "when", "where", "who", "which"];

/// Words that open a request or command.
pub const REQUEST_WORDS: &[&str] = &[
    "could", "can", "would", "will", "please", "help", "need", "want", "tell", "show", "give",
    "explain", "describe", "list", "find", "get", "make", "do",
];

/// Detected message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Ends with `?` or opens with a question word
    Question,
    /// Opens with a request word (could, please, explain, ...)
    Request,
    /// Anything else
    SharingInfo,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl MessageType {
    /// All message types, in rule order.
    pub const ALL: [MessageType; 3] = [
        MessageType::Question,
        MessageType::Request,
        MessageType::SharingInfo,
    ];

    /// Returns the output name of the message type
    pub fn label(&self) -> &'static str {
        match self {
            MessageType::Question => "question",
            MessageType::Request => "request",
            MessageType::SharingInfo => "sharing_info",
        }
    }
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here, the patterns are built from constant word lists
static QUESTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})", QUESTION_WORDS.join("|")))
        .expect("Invalid regex: question prefix pattern")
});

static REQUEST_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})", REQUEST_WORDS.join("|")))
        .expect("Invalid regex: request prefix pattern")
});

/// Classify the type of a message.
///
/// The text is trimmed and lower-cased before any rule runs.
pub fn classify_message_type(text: &str) -> MessageType {
    let normalized = text.trim().to_lowercase();

    if normalized.ends_with('?') || QUESTION_PREFIX.is_match(&normalized) {
        MessageType::Question
    } else if REQUEST_PREFIX.is_match(&normalized) {
        MessageType::Request
    } else {
        MessageType::SharingInfo
    }
}
