//! Escalation Detector - risk language in a single dialogue utterance.

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::Lexicon;

/// Outcome of checking one utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationCheck {
    pub flagged: bool,
    /// First trigger (in lexicon order) found in the utterance.
    pub trigger: Option<String>,
}

impl EscalationCheck {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn flagged(trigger: impl Into<String>) -> Self {
        Self {
            flagged: true,
            trigger: Some(trigger.into()),
        }
    }

    /// Human-readable reason, present only when flagged.
    pub fn reason(&self) -> Option<String> {
        self.trigger
            .as_ref()
            .map(|t| format!("Escalation language detected: \"{}\"", t))
    }
}

/// Stateless detector. Debouncing and display timing belong to the session.
pub struct EscalationDetector;

impl EscalationDetector {
    pub fn detect(utterance: &str, lexicon: &Lexicon) -> EscalationCheck {
        let lower = utterance.to_lowercase();
        lexicon
            .escalation_triggers
            .iter()
            .find(|trigger| lower.contains(trigger.as_str()))
            .map(|trigger| EscalationCheck::flagged(trigger.clone()))
            .unwrap_or_default()
    }
}
