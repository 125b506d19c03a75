//! Archive loading and flattening.
//!
//! Turns the nested conversation export into the flat, ordered list of user
//! message texts the classifiers work on. Traversal order is archive order,
//! then mapping document order.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

use super::model::{Archive, Node};
use crate::error::AppError;

/// Counters gathered while flattening an archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Conversations visited
    pub conversations: usize,
    /// Mapping nodes visited
    pub nodes: usize,
    /// Nodes skipped because they carry no message
    pub nodes_without_message: usize,
    /// Messages skipped because the author is not the user
    pub non_user_messages: usize,
    /// User messages extracted
    pub user_messages: usize,
}

/// Loads an archive from a JSON file.
///
/// The file handle is dropped when this returns, on success or failure.
pub fn load_archive(path: &Path) -> Result<Archive, AppError> {
    info!("Loading conversation archive from {:?}", path);

    let file = File::open(path)?;
    let archive: Archive = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::DataFormat(format!("{}: {}", path.display(), e))
    })?;

    info!("Loaded {} conversations", archive.conversations.len());
    Ok(archive)
}

/// Parses an archive from an in-memory JSON document.
pub fn parse_archive(json: &str) -> Result<Archive, AppError> {
    Ok(serde_json::from_str(json)?)
}

impl Archive {
    /// Extracts every user message text, in traversal order, with statistics.
    pub fn flatten(&self) -> Result<(Vec<String>, ArchiveStats), AppError> {
        let mut stats = ArchiveStats {
            conversations: self.conversations.len(),
            ..Default::default()
        };
        let mut texts = Vec::new();

        for (index, conversation) in self.conversations.iter().enumerate() {
            debug!(
                "Flattening conversation #{} ({:?}, {} nodes)",
                index,
                conversation.title.as_deref().unwrap_or("untitled"),
                conversation.mapping.len()
            );

            for (node_id, raw_node) in &conversation.mapping {
                stats.nodes += 1;

                let node = Node::deserialize(raw_node).map_err(|e| {
                    AppError::DataFormat(format!(
                        "conversation #{} node {:?}: {}",
                        index, node_id, e
                    ))
                })?;

                let Some(message) = node.message else {
                    stats.nodes_without_message += 1;
                    continue;
                };

                if !message.is_from_user() {
                    stats.non_user_messages += 1;
                    continue;
                }

                texts.push(message.text());
            }
        }

        stats.user_messages = texts.len();
        info!(
            "Flattened {} conversations: {} nodes, {} user messages ({} without message, {} from other roles)",
            stats.conversations,
            stats.nodes,
            stats.user_messages,
            stats.nodes_without_message,
            stats.non_user_messages
        );

        Ok((texts, stats))
    }

    /// Extracts every user message text, in traversal order.
    pub fn user_messages(&self) -> Result<Vec<String>, AppError> {
        self.flatten().map(|(texts, _)| texts)
    }
}
