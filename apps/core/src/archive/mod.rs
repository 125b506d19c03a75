//! # Archive Module
//!
//! Reads an exported conversation archive and flattens it into user message texts.
//!
//! ## Components
//! - `model`: serde types for conversations, nodes, messages and parts
//! - `loader`: file loading and the user-message flattener

pub mod loader;
pub mod model;

pub use loader::{load_archive, parse_archive, ArchiveStats};
pub use model::{Archive, Conversation, Message, Node};
