//! Emotion classification by keyword presence.

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::{EmotionCategory, Lexicon};

/// Score of one emotion category: how many of its keywords appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub category: EmotionCategory,
    pub score: u32,
}

/// Result of classifying a narrative's emotional content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub dominant: EmotionCategory,
    /// One entry per lexicon category, in lexicon order.
    pub scores: Vec<EmotionScore>,
    /// Highest score divided by ten. Not capped at 1.0.
    pub intensity: f64,
}

/// Stateless emotion classifier.
pub struct EmotionClassifier;

impl EmotionClassifier {
    /// Scores every category and picks the dominant one.
    ///
    /// A keyword counts once no matter how often it appears. On equal
    /// scores the category declared later wins, which makes `Neutral` the
    /// answer when nothing matched.
    pub fn classify(text: &str, lexicon: &Lexicon) -> EmotionReading {
        let lower = text.to_lowercase();

        let scores: Vec<EmotionScore> = lexicon
            .emotions
            .iter()
            .map(|(category, keywords)| EmotionScore {
                category: *category,
                score: keywords
                    .iter()
                    .filter(|k| lower.contains(k.as_str()))
                    .count() as u32,
            })
            .collect();

        let mut dominant = EmotionCategory::Neutral;
        let mut best = 0;
        for (i, entry) in scores.iter().enumerate() {
            if i == 0 || entry.score >= best {
                dominant = entry.category;
                best = entry.score;
            }
        }

        EmotionReading {
            dominant,
            intensity: best as f64 / 10.0,
            scores,
        }
    }

    /// Score for a single category, zero if the lexicon lacks it.
    pub fn score_of(reading: &EmotionReading, category: EmotionCategory) -> u32 {
        reading
            .scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}
