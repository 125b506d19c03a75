//! Wrapped Report - Output structure for the analysis.
//!
//! Field names and order match the JSON document printed by the CLI.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::message_type::MessageType;
use super::topics::Category;
use crate::error::AppError;

/// Fallback sentence when no message matched any topic
pub const NO_TOPIC_FUN_FACT: &str = "None of your messages matched a known topic.";

/// A user message with both classifications attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedMessage {
    /// Flattened message text
    pub text: String,
    /// Detected message type
    pub message_type: MessageType,
    /// Matched categories, in table order
    pub topics: Vec<Category>,
}

impl ClassifiedMessage {
    /// Whether the message matched the given category
    pub fn mentions(&self, category: Category) -> bool {
        self.topics.contains(&category)
    }
}

/// Message type counts in first-seen order.
///
/// Types that never occurred are absent, so they are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTypeBreakdown {
    counts: Vec<(MessageType, usize)>,
}

impl MessageTypeBreakdown {
    /// Count one more message of the given type
    pub fn record(&mut self, message_type: MessageType) {
        match self.counts.iter_mut().find(|(t, _)| *t == message_type) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((message_type, 1)),
        }
    }

    /// Count for one type (zero if never seen)
    pub fn get(&self, message_type: MessageType) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == message_type)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Sum over all types
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MessageType, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl Serialize for MessageTypeBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (message_type, count) in &self.counts {
            map.serialize_entry(message_type.label(), count)?;
        }
        map.end()
    }
}

/// Details about the most discussed topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainTopicDetails {
    /// Top ranked category, `null` when nothing matched
    pub topic: Option<Category>,
    /// Number of messages mentioning the topic
    pub total_messages: usize,
    /// One-line fun fact about the topic
    pub fun_fact: String,
}

/// Complete summary of an archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrappedReport {
    /// Ranked top topics
    #[serde(rename = "top_3_topics")]
    pub top_topics: Vec<Category>,

    /// Message count per type
    pub message_type_breakdown: MessageTypeBreakdown,

    /// Main topic summary
    pub main_topic_details: MainTopicDetails,

    /// First few messages about the main topic, in traversal order
    #[serde(rename = "sample_messages_main_topic")]
    pub sample_messages: Vec<String>,
}

/// Builds the fun fact sentence for the main topic.
pub fn fun_fact(topic: Option<Category>, question_count: usize) -> String {
    match topic {
        Some(topic) => format!("You asked {} questions about {}.", question_count, topic),
        None => NO_TOPIC_FUN_FACT.to_string(),
    }
}

impl WrappedReport {
    /// Serialize the report. Pretty output uses 2-space indentation.
    pub fn to_json(&self, pretty: bool) -> Result<String, AppError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| AppError::Internal(format!("Failed to serialize report: {}", e)))
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        let topics: Vec<&str> = self.top_topics.iter().map(|c| c.label()).collect();
        format!(
            "Messages: {}, Top topics: [{}], Main topic: {} ({} messages)",
            self.message_type_breakdown.total(),
            topics.join(", "),
            self.main_topic_details
                .topic
                .map(|c| c.label())
                .unwrap_or("none"),
            self.main_topic_details.total_messages
        )
    }
}
