//! Wrapped Analyzer - Main orchestrator for the brain module.
//!
//! Classifies every user message (type + topics), tallies the results and
//! builds the [`WrappedReport`].

use tracing::{debug, info};

use super::message_type::{classify_message_type, MessageType};
use super::report::{fun_fact, ClassifiedMessage, MainTopicDetails, MessageTypeBreakdown, WrappedReport};
use super::topics::{identify_topics, Category, CATEGORY_COUNT};
use crate::config::AnalysisConfig;

/// Aggregated counts over a set of classified messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Message count per type, first-seen order
    pub message_types: MessageTypeBreakdown,
    /// Message count per category, indexed by table position
    topic_counts: [usize; CATEGORY_COUNT],
}

impl Tally {
    /// Number of messages that matched the category
    pub fn topic_count(&self, category: Category) -> usize {
        self.topic_counts[category.index()]
    }

    /// Matched categories by descending count. Ties keep table order.
    pub fn ranked_topics(&self) -> Vec<Category> {
        let mut ranked: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| self.topic_count(*c) > 0)
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| self.topic_count(*b).cmp(&self.topic_count(*a)));
        ranked
    }
}

/// Main analyzer that turns user messages into a report
#[derive(Debug, Clone, Default)]
pub struct WrappedAnalyzer {
    config: AnalysisConfig,
}

impl WrappedAnalyzer {
    /// Create an analyzer. The config is expected to be validated already.
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run both classifiers on one message
    pub fn classify(&self, text: &str) -> ClassifiedMessage {
        let classified = ClassifiedMessage {
            text: text.to_string(),
            message_type: classify_message_type(text),
            topics: identify_topics(text),
        };
        debug!(
            "Classified message as {} with topics {:?}",
            classified.message_type, classified.topics
        );
        classified
    }

    /// Count message types and topics. Each message counts once per matched category.
    pub fn tally(&self, messages: &[ClassifiedMessage]) -> Tally {
        let mut tally = Tally::default();
        for message in messages {
            tally.message_types.record(message.message_type);
            for topic in &message.topics {
                tally.topic_counts[topic.index()] += 1;
            }
        }
        tally
    }

    /// Analyze the user messages of an archive.
    ///
    /// Returns `None` when there is nothing to analyze.
    pub fn analyze(&self, messages: &[String]) -> Option<WrappedReport> {
        if messages.is_empty() {
            info!("No user messages to analyze");
            return None;
        }

        let classified: Vec<ClassifiedMessage> =
            messages.iter().map(|text| self.classify(text)).collect();
        let tally = self.tally(&classified);

        let ranked = tally.ranked_topics();
        let main_topic = ranked.first().copied();
        let top_topics: Vec<Category> = ranked.into_iter().take(self.config.top_n).collect();

        let main_topic_messages: Vec<&ClassifiedMessage> = match main_topic {
            Some(topic) => classified.iter().filter(|m| m.mentions(topic)).collect(),
            None => Vec::new(),
        };
        let question_count = main_topic_messages
            .iter()
            .filter(|m| m.message_type == MessageType::Question)
            .count();

        let report = WrappedReport {
            top_topics,
            message_type_breakdown: tally.message_types,
            main_topic_details: MainTopicDetails {
                topic: main_topic,
                total_messages: main_topic_messages.len(),
                fun_fact: fun_fact(main_topic, question_count),
            },
            sample_messages: main_topic_messages
                .iter()
                .take(self.config.sample_size)
                .map(|m| m.text.clone())
                .collect(),
        };

        info!("Analysis complete. {}", report.summary());
        Some(report)
    }
}
