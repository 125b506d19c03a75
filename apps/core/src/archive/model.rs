//! Archive data model.
//!
//! Mirrors the exported conversation archive: an array of conversations, each
//! holding a `mapping` of node records keyed by node id. Only the fields the
//! analysis needs are modelled; everything else in the export is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Role that marks a message as user-authored.
pub const USER_ROLE: &str = "user";

/// `content_type` of parts that point at an uploaded image.
pub const IMAGE_CONTENT_TYPE: &str = "image_asset_pointer";

/// Placeholder rendered in place of an image part.
pub const IMAGE_PLACEHOLDER: &str = "[IMAGE]";

/// The whole exported archive, in file order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Archive {
    pub conversations: Vec<Conversation>,
}

/// A single exported conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    /// Conversation title, when the export carries one.
    #[serde(default)]
    pub title: Option<String>,
    /// Node records keyed by node id. Iterates in document order.
    pub mapping: Map<String, Value>,
}

/// A node of the conversation tree. Structural nodes carry no message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub message: Option<Message>,
}

/// A message attached to a node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub author: Option<Author>,
    /// Raw content. Usually `{"content_type": ..., "parts": [...]}` but any shape is accepted.
    #[serde(default)]
    pub content: Option<Value>,
}

/// Author of a message (e.g. "user", "assistant", "system").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub role: Option<String>,
}

impl Message {
    /// Returns the author role, if any.
    pub fn role(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.role.as_deref())
    }

    /// Whether the message was written by the user.
    pub fn is_from_user(&self) -> bool {
        self.role() == Some(USER_ROLE)
    }

    /// Renders the message content as a single string.
    ///
    /// Non-empty `parts` are rendered one by one and joined with a space.
    /// Any other content shape falls back to a generic rendering of the
    /// whole value; absent content renders as an empty object (`{}`).
    pub fn text(&self) -> String {
        let Some(content) = self.content.as_ref() else {
            return render_value(&Value::Object(Map::new()));
        };

        match content.get("parts").and_then(Value::as_array) {
            Some(parts) if !parts.is_empty() => parts
                .iter()
                .filter_map(render_part)
                .collect::<Vec<_>>()
                .join(" "),
            _ => render_value(content),
        }
    }
}

/// Renders one content part. Parts that are neither text nor objects are dropped.
fn render_part(part: &Value) -> Option<String> {
    match part {
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => {
            if fields.get("content_type").and_then(Value::as_str) == Some(IMAGE_CONTENT_TYPE) {
                Some(IMAGE_PLACEHOLDER.to_string())
            } else {
                Some(render_value(part))
            }
        }
        _ => None,
    }
}

/// Generic string rendering: strings as-is, everything else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
