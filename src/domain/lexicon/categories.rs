//! Semantic categories the analyzer classifies narratives into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value a participant expresses caring about.
///
/// Declaration order is the order values are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueCategory {
    Respect,
    Trust,
    Communication,
    Fairness,
    Support,
    Autonomy,
}

impl ValueCategory {
    pub const ALL: [ValueCategory; 6] = [
        ValueCategory::Respect,
        ValueCategory::Trust,
        ValueCategory::Communication,
        ValueCategory::Fairness,
        ValueCategory::Support,
        ValueCategory::Autonomy,
    ];

    /// Lowercase name, as shown in snapshots and agreements.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueCategory::Respect => "respect",
            ValueCategory::Trust => "trust",
            ValueCategory::Communication => "communication",
            ValueCategory::Fairness => "fairness",
            ValueCategory::Support => "support",
            ValueCategory::Autonomy => "autonomy",
        }
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion category detected in a narrative.
///
/// Declaration order matters: on equal scores the later category wins, so
/// `Neutral` (no keywords) is the result when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Anger,
    Sadness,
    Fear,
    Joy,
    #[default]
    Neutral,
}

impl EmotionCategory {
    pub const ALL: [EmotionCategory; 5] = [
        EmotionCategory::Anger,
        EmotionCategory::Sadness,
        EmotionCategory::Fear,
        EmotionCategory::Joy,
        EmotionCategory::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Anger => "anger",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Joy => "joy",
            EmotionCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall emotional tone of the room, derived from dominant emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverallTone {
    Tense,
    Hurt,
    #[default]
    Neutral,
}

impl OverallTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallTone::Tense => "tense",
            OverallTone::Hurt => "hurt",
            OverallTone::Neutral => "neutral",
        }
    }
}

impl fmt::Display for OverallTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
