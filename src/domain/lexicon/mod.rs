//! Lexicon - category to trigger-word tables driving classification.
//!
//! The built-in tables live in `tables`; a [`Lexicon`] is an owned copy that
//! callers may extend or replace without touching analyzer code.

mod categories;
mod tables;

pub use categories::{EmotionCategory, OverallTone, ValueCategory};
pub use tables::{
    EMOTION_KEYWORDS, ESCALATION_TRIGGERS, NEED_PHRASES, PAIN_INDICATORS, VALUE_KEYWORDS,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Shared instance of the built-in lexicon.
pub static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::builtin);

/// Complete set of trigger tables used by the analyzer and detector.
///
/// # Invariants
///
/// - All words are stored lowercase
/// - `values` and `emotions` keep category declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub pain_indicators: Vec<String>,
    pub values: Vec<(ValueCategory, Vec<String>)>,
    pub need_phrases: Vec<String>,
    pub emotions: Vec<(EmotionCategory, Vec<String>)>,
    pub escalation_triggers: Vec<String>,
}

impl Lexicon {
    /// Builds the lexicon from the built-in tables.
    pub fn builtin() -> Self {
        Self {
            pain_indicators: owned(PAIN_INDICATORS),
            values: VALUE_KEYWORDS
                .iter()
                .map(|(category, words)| (*category, owned(words)))
                .collect(),
            need_phrases: owned(NEED_PHRASES),
            emotions: EMOTION_KEYWORDS
                .iter()
                .map(|(category, words)| (*category, owned(words)))
                .collect(),
            escalation_triggers: owned(ESCALATION_TRIGGERS),
        }
    }

    /// Adds escalation triggers, lowercased.
    pub fn with_escalation_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.escalation_triggers
            .extend(triggers.into_iter().map(|t| t.as_ref().to_lowercase()));
        self
    }

    /// Adds pain indicator words, lowercased.
    pub fn with_pain_indicators<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.pain_indicators
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
