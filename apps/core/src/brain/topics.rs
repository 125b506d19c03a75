//! Topic identification using a static keyword table.
//!
//! Each of the 20 categories owns a fixed list of lowercase keywords and
//! phrases. A message matches a category when its lower-cased text contains
//! any of those keywords as a plain substring. There is no word-boundary
//! check, so "art" matches inside "start".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of categories in the table.
pub const CATEGORY_COUNT: usize = 20;

/// Topic category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Technology,
    Travel,
    Relationships,
    Food,
    Finance,
    Health,
    Art,
    Science,
    Sports,
    Education,
    Business,
    Gaming,
    Fashion,
    Environment,
    Entertainment,
    History,
    Politics,
    Philosophy,
    Psychology,
    SelfImprovement,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// All categories, in table order. Ties in rankings resolve in this order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Technology,
        Category::Travel,
        Category::Relationships,
        Category::Food,
        Category::Finance,
        Category::Health,
        Category::Art,
        Category::Science,
        Category::Sports,
        Category::Education,
        Category::Business,
        Category::Gaming,
        Category::Fashion,
        Category::Environment,
        Category::Entertainment,
        Category::History,
        Category::Politics,
        Category::Philosophy,
        Category::Psychology,
        Category::SelfImprovement,
    ];

    /// Position of the category in the table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the output name of the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Travel => "travel",
            Category::Relationships => "relationships",
            Category::Food => "food",
            Category::Finance => "finance",
            Category::Health => "health",
            Category::Art => "art",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Education => "education",
            Category::Business => "business",
            Category::Gaming => "gaming",
            Category::Fashion => "fashion",
            Category::Environment => "environment",
            Category::Entertainment => "entertainment",
            Category::History => "history",
            Category::Politics => "politics",
            Category::Philosophy => "philosophy",
            Category::Psychology => "psychology",
            Category::SelfImprovement => "self-improvement",
        }
    }

    /// Keywords bound to the category, all lowercase.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Technology => &[
                "tech", "ai", "machine learning", "software", "programming", "coding",
                "data science", "internet", "cybersecurity", "digital", "innovation", "startup",
                "algorithm",
            ],
            Category::Travel => &[
                "travel", "hotel", "flight", "vacation", "tour", "explore", "adventure",
                "destination", "journey", "trip", "tourism", "wanderlust", "backpacking",
            ],
            Category::Relationships => &[
                "relationship", "dating", "friend", "love", "family", "marriage", "friendship",
                "partner", "connection", "social", "communication",
            ],
            Category::Food => &[
                "food", "recipe", "cuisine", "restaurant", "cooking", "meal", "dish", "ingredient",
                "dining", "nutrition", "diet", "taste", "culinary",
            ],
            Category::Finance => &[
                "stock", "crypto", "money", "loan", "finance", "investment", "banking", "budget",
                "economy", "market", "trading", "wealth", "credit",
            ],
            Category::Health => &[
                "health", "doctor", "exercise", "diet", "mental health", "wellness", "fitness",
                "workout", "medicine", "healthcare", "wellbeing", "nutrition",
            ],
            Category::Art => &[
                "art", "painting", "drawing", "music", "literature", "poetry", "dance", "film",
                "movie", "sculpture", "photography", "design", "creative", "gallery",
            ],
            Category::Science => &[
                "science", "research", "experiment", "physics", "chemistry", "biology",
                "astronomy", "space", "scientist", "laboratory", "discovery", "nature",
            ],
            Category::Sports => &[
                "sports", "football", "basketball", "soccer", "baseball", "tennis", "golf",
                "hockey", "swimming", "athlete", "game", "competition", "team", "sport",
            ],
            Category::Education => &[
                "education", "learning", "school", "university", "college", "student", "teacher",
                "study", "knowledge", "course", "curriculum", "academic", "scholarship",
            ],
            Category::Business => &[
                "business", "company", "entrepreneur", "marketing", "sales", "management",
                "leadership", "strategy", "product", "service", "industry", "commerce",
            ],
            Category::Gaming => &[
                "gaming", "video game", "console", "pc gaming", "esports", "gamer",
                "online gaming", "virtual reality", "game development", "game design",
                "multiplayer", "rpg",
            ],
            Category::Fashion => &[
                "fashion", "style", "clothing", "apparel", "trend", "design", "model", "brand",
                "outfit", "accessory", "fashion show", "designer", "luxury",
            ],
            Category::Environment => &[
                "environment", "climate change", "sustainability", "renewable energy",
                "conservation", "ecology", "nature", "pollution", "green", "eco-friendly",
                "recycling",
            ],
            Category::Entertainment => &[
                "entertainment", "movie", "music", "tv show", "celebrity", "actor", "actress",
                "film", "cinema", "concert", "festival", "performance", "theater",
            ],
            Category::History => &[
                "history", "historical", "past", "ancient", "civilization", "culture", "event",
                "era", "timeline", "artifact", "archaeology", "museum", "heritage",
            ],
            Category::Politics => &[
                "politics", "government", "policy", "election", "vote", "democracy", "republic",
                "political", "legislation", "law", "president", "congress", "parliament",
            ],
            Category::Philosophy => &[
                "philosophy", "ethics", "morality", "thought", "idea", "concept", "wisdom",
                "logic", "reason", "existence", "mind", "consciousness", "truth",
            ],
            Category::Psychology => &[
                "psychology", "behavior", "mind", "emotion", "therapy", "counseling",
                "mental health", "cognitive", "personality", "psychological", "brain",
                "perception",
            ],
            Category::SelfImprovement => &[
                "self-improvement", "motivation", "inspiration", "productivity", "goal", "habit",
                "success", "personal development", "mindset", "growth", "self-help", "discipline",
            ],
        }
    }

    /// Whether the already lower-cased text mentions this category.
    fn matches(&self, text_lower: &str) -> bool {
        self.keywords().iter().any(|kw| text_lower.contains(kw))
    }
}

/// Identify every category a message mentions, in table order.
///
/// The text is lower-cased but not trimmed.
pub fn identify_topics(text: &str) -> Vec<Category> {
    let text_lower = text.to_lowercase();

    Category::ALL
        .iter()
        .copied()
        .filter(|category| category.matches(&text_lower))
        .collect()
}
