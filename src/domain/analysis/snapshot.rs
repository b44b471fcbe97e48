//! Conflict Snapshot Synthesizer - shared findings across participants.

use serde::{Deserialize, Serialize};

use crate::domain::lexicon::{EmotionCategory, OverallTone, ValueCategory};

use super::signals::ParticipantSignals;

/// Intensity above which a participant is reported as highly charged.
pub const HIGH_INTENSITY_THRESHOLD: f64 = 0.5;

/// Generic misunderstandings surfaced for every conflict.
pub const STANDARD_MISUNDERSTANDINGS: [&str; 3] = [
    "Different perspectives on the same events",
    "Unmet expectations about communication",
    "Assumptions about intentions",
];

/// Opportunities present in every mediation.
pub const STANDARD_OPPORTUNITIES: [&str; 2] = [
    "Willingness to engage in mediation",
    "Desire for resolution",
];

/// Needs of one participant, labelled by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantNeeds {
    pub participant: String,
    pub needs: Vec<String>,
}

/// Emotional picture of the room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionalPattern {
    pub dominant_emotions: Vec<EmotionCategory>,
    pub high_intensity_participants: Vec<String>,
    pub overall_tone: OverallTone,
}

/// Neutral cross-participant synthesis used to drive mediation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictSnapshot {
    pub common_values: Vec<ValueCategory>,
    pub per_participant_needs: Vec<ParticipantNeeds>,
    pub emotional_pattern: EmotionalPattern,
    pub misunderstandings: Vec<String>,
    pub opportunities: Vec<String>,
}

impl ConflictSnapshot {
    /// Common values as a comma-separated list.
    pub fn common_values_label(&self) -> String {
        self.common_values
            .iter()
            .map(ValueCategory::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Stateless synthesizer.
pub struct SnapshotSynthesizer;

impl SnapshotSynthesizer {
    /// Builds the snapshot from every participant's signals.
    ///
    /// Pure: the same input always yields a value-equal snapshot.
    pub fn synthesize(signals: &[ParticipantSignals]) -> ConflictSnapshot {
        let common_values = Self::common_values(signals);
        let opportunities = Self::opportunities(&common_values);

        ConflictSnapshot {
            per_participant_needs: signals
                .iter()
                .map(|s| ParticipantNeeds {
                    participant: s.participant_name.clone(),
                    needs: s.needs.clone(),
                })
                .collect(),
            emotional_pattern: Self::emotional_pattern(signals),
            misunderstandings: STANDARD_MISUNDERSTANDINGS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            opportunities,
            common_values,
        }
    }

    /// Categories held by more than one participant, in order of first
    /// appearance.
    ///
    /// Occurrences are counted across the flattened value lists, so a
    /// category listed twice for the same participant also counts twice.
    pub fn common_values(signals: &[ParticipantSignals]) -> Vec<ValueCategory> {
        let mut counts: Vec<(ValueCategory, usize)> = Vec::new();
        for value in signals.iter().flat_map(|s| s.values.iter()) {
            match counts.iter_mut().find(|(v, _)| v == value) {
                Some((_, n)) => *n += 1,
                None => counts.push((*value, 1)),
            }
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(v, _)| v)
            .collect()
    }

    fn emotional_pattern(signals: &[ParticipantSignals]) -> EmotionalPattern {
        let dominant_emotions: Vec<EmotionCategory> =
            signals.iter().map(|s| s.dominant_emotion).collect();

        let overall_tone = if dominant_emotions.contains(&EmotionCategory::Anger) {
            OverallTone::Tense
        } else if dominant_emotions.contains(&EmotionCategory::Sadness) {
            OverallTone::Hurt
        } else {
            OverallTone::Neutral
        };

        EmotionalPattern {
            high_intensity_participants: signals
                .iter()
                .filter(|s| s.emotion_intensity > HIGH_INTENSITY_THRESHOLD)
                .map(|s| s.participant_name.clone())
                .collect(),
            dominant_emotions,
            overall_tone,
        }
    }

    fn opportunities(common_values: &[ValueCategory]) -> Vec<String> {
        let mut opportunities = Vec::with_capacity(3);
        if !common_values.is_empty() {
            let joined = common_values
                .iter()
                .map(ValueCategory::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            opportunities.push(format!("Shared values: {}", joined));
        }
        opportunities.extend(STANDARD_OPPORTUNITIES.iter().map(|o| o.to_string()));
        opportunities
    }
}
