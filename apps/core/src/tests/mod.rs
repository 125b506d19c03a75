//! Test Module
//!
//! Cross-module test suite for the wrapped core.
//!
//! ## Test Categories
//! - `brain_tests`: message type rules, topic table, aggregation properties
//! - `archive_tests`: archive parsing and user-message flattening
//! - `integration_tests`: full runs against on-disk archives

pub mod brain_tests;

/// Builds a conversation record from `(node_id, role, parts)` triples.
/// A `None` role produces a node without a message.
pub(crate) fn conversation(nodes: &[(&str, Option<&str>, serde_json::Value)]) -> serde_json::Value {
    let mut mapping = serde_json::Map::new();
    for (id, role, parts) in nodes {
        let node = match role {
            Some(role) => serde_json::json!({
                "id": id,
                "message": {
                    "id": id,
                    "author": {"role": role},
                    "content": {"content_type": "text", "parts": parts}
                }
            }),
            None => serde_json::json!({"id": id, "message": null, "children": []}),
        };
        mapping.insert(id.to_string(), node);
    }
    serde_json::json!({"title": "test conversation", "mapping": mapping})
}
