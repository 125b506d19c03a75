//! # Brain Module
//!
//! Fast, rule-based analysis of user messages. No model required.
//!
//! ## Components
//! - `message_type`: question / request / sharing_info classification (prefix rules)
//! - `topics`: category identification from the static keyword table
//! - `report`: output data structure
//! - `analyzer`: main orchestrator (classification, tallies, ranking)

pub mod analyzer;
pub mod message_type;
pub mod report;
pub mod topics;

// Re-export main types for convenience
pub use analyzer::{Tally, WrappedAnalyzer};
pub use message_type::{classify_message_type, MessageType};
pub use report::{ClassifiedMessage, MainTopicDetails, MessageTypeBreakdown, WrappedReport};
pub use topics::{identify_topics, Category};
