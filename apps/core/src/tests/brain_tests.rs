//! Brain Module Tests
//!
//! Rule tables and aggregation properties of the message type classifier,
//! the topic classifier and the analyzer.

use crate::brain::message_type::{QUESTION_WORDS, REQUEST_WORDS};
use crate::brain::{
    classify_message_type, identify_topics, Category, MessageType, WrappedAnalyzer,
};
use crate::config::AnalysisConfig;

#[cfg(test)]
mod message_type_tests {
    use super::*;

    #[test]
    fn test_trailing_question_mark_always_wins() {
        let inputs = vec![
            "Please help me?",
            "I think this is fine?",
            "tell me more?",
            "[IMAGE]?",
            "?",
            "   Explain again?   ",
        ];

        for input in inputs {
            assert_eq!(
                classify_message_type(input),
                MessageType::Question,
                "Expected Question for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_every_question_word() {
        for word in QUESTION_WORDS {
            let input = format!("{} is going on.", word.to_uppercase());
            assert_eq!(
                classify_message_type(&input),
                MessageType::Question,
                "Expected Question for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_every_request_word() {
        for word in REQUEST_WORDS {
            let input = format!("{} the thing.", word);
            assert_eq!(
                classify_message_type(&input),
                MessageType::Request,
                "Expected Request for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_sharing_info() {
        let inputs = vec![
            "I finished the book yesterday.",
            "Here is my essay draft",
            "[IMAGE]",
            "   ",
            "ok",
        ];

        for input in inputs {
            assert_eq!(
                classify_message_type(input),
                MessageType::SharingInfo,
                "Expected SharingInfo for '{}'",
                input
            );
        }
    }

    #[test]
    fn test_leading_whitespace_is_trimmed() {
        assert_eq!(classify_message_type("\n\t  why not"), MessageType::Question);
        assert_eq!(classify_message_type("   give me a hint"), MessageType::Request);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let inputs = vec!["How so?", "make a plan", "just saying", ""];
        for input in inputs {
            assert_eq!(classify_message_type(input), classify_message_type(input));
        }
    }
}

#[cfg(test)]
mod topic_tests {
    use super::*;

    #[test]
    fn test_topics_ordered_without_duplicates() {
        let inputs = vec![
            "My family loves cooking and music, we film every meal for the music festival",
            "The president gave a speech about climate change and the economy",
            "I want to improve my mindset and productivity with a workout habit",
            "nothing relevant",
        ];

        for input in inputs {
            let topics = identify_topics(input);
            for pair in topics.windows(2) {
                assert!(
                    pair[0].index() < pair[1].index(),
                    "Topics out of table order for '{}': {:?}",
                    input,
                    topics
                );
            }
        }
    }

    #[test]
    fn test_topics_are_idempotent() {
        let text = "Traveling to a museum to study ancient history";
        assert_eq!(identify_topics(text), identify_topics(text));
    }

    #[test]
    fn test_multi_word_keywords() {
        assert!(identify_topics("Tips on renewable energy").contains(&Category::Environment));
        assert!(identify_topics("my new VIDEO GAME").contains(&Category::Gaming));
        assert!(identify_topics("personal development plan").contains(&Category::SelfImprovement));
    }

    #[test]
    fn test_substring_false_positives_are_kept() {
        // "start" -> art, "pastry" -> past
        assert!(identify_topics("start").contains(&Category::Art));
        assert!(identify_topics("pastry").contains(&Category::History));
    }

    #[test]
    fn test_whitespace_is_not_trimmed_for_topics() {
        assert_eq!(identify_topics("  hotel  "), vec![Category::Travel]);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_breakdown_sums_to_message_count() {
        let messages = texts(&[
            "What is a recipe?",
            "please plan my trip",
            "I like hiking",
            "how about golf",
            "Explain stocks",
        ]);
        let report = WrappedAnalyzer::default().analyze(&messages).unwrap();

        assert_eq!(report.message_type_breakdown.total(), messages.len());
        let per_type: usize = MessageType::ALL
            .iter()
            .map(|t| report.message_type_breakdown.get(*t))
            .sum();
        assert_eq!(per_type, messages.len());
        assert_eq!(report.message_type_breakdown.get(MessageType::Question), 2);
        assert_eq!(report.message_type_breakdown.get(MessageType::Request), 2);
        assert_eq!(report.message_type_breakdown.get(MessageType::SharingInfo), 1);
    }

    #[test]
    fn test_sample_length_is_min_of_three_and_total() {
        let analyzer = WrappedAnalyzer::default();

        for count in 1..=5 {
            let messages: Vec<String> = (0..count).map(|i| format!("hotel number {}", i)).collect();
            let report = analyzer.analyze(&messages).unwrap();
            assert_eq!(report.main_topic_details.total_messages, count);
            assert_eq!(report.sample_messages.len(), count.min(3));
            assert_eq!(report.sample_messages[0], "hotel number 0");
        }
    }

    #[test]
    fn test_fun_fact_counts_questions_about_main_topic() {
        let messages = texts(&[
            "Which hotel is best?",
            "Book a flight",
            "what about the tour",
            "What recipe should I cook?",
        ]);
        let report = WrappedAnalyzer::default().analyze(&messages).unwrap();

        assert_eq!(report.main_topic_details.topic, Some(Category::Travel));
        assert_eq!(report.main_topic_details.total_messages, 3);
        assert_eq!(
            report.main_topic_details.fun_fact,
            "You asked 2 questions about travel."
        );
        assert_eq!(
            report.sample_messages,
            texts(&["Which hotel is best?", "Book a flight", "what about the tour"])
        );
    }

    #[test]
    fn test_top_topics_capped_and_ranked() {
        let messages = texts(&[
            "election", "vote", "law",           // politics x3
            "hotel", "flight",                   // travel x2
            "recipe",                            // food x1
            "golf",                              // sports x1
        ]);
        let report = WrappedAnalyzer::default().analyze(&messages).unwrap();

        // food and sports tie; food comes first in the table
        assert_eq!(
            report.top_topics,
            vec![Category::Politics, Category::Travel, Category::Food]
        );
    }

    #[test]
    fn test_larger_top_n() {
        let analyzer = WrappedAnalyzer::new(AnalysisConfig {
            top_n: 20,
            sample_size: 3,
        });
        let report = analyzer.analyze(&texts(&["hotel", "recipe", "golf"])).unwrap();
        assert_eq!(
            report.top_topics,
            vec![Category::Travel, Category::Food, Category::Sports]
        );
    }
}
