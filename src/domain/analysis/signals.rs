//! Per-participant signal records produced by narrative analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, ValidationError};
use crate::domain::lexicon::{EmotionCategory, ValueCategory};

/// Maximum number of pain points, values or needs kept per participant.
pub const MAX_SIGNAL_ITEMS: usize = 3;

/// Opt-in refinements to the default extraction rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Drop need sentences already captured by an earlier intent phrase.
    pub dedupe_needs: bool,
    /// Cap emotion intensity at 1.0.
    pub clamp_intensity: bool,
}

/// Text-derived part of a participant's signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeFindings {
    pub pain_points: Vec<String>,
    pub values: Vec<ValueCategory>,
    pub needs: Vec<String>,
}

/// Structured extraction from one participant's narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSignals {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub pain_points: Vec<String>,
    pub values: Vec<ValueCategory>,
    pub needs: Vec<String>,
    pub dominant_emotion: EmotionCategory,
    pub emotion_intensity: f64,
}

impl ParticipantSignals {
    /// Applies a manual correction made during alignment review.
    ///
    /// List fields are truncated to [`MAX_SIGNAL_ITEMS`].
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the intensity is negative or not finite
    pub fn apply_patch(&mut self, patch: SignalsPatch) -> Result<(), ValidationError> {
        if let Some(intensity) = patch.emotion_intensity {
            if !intensity.is_finite() || intensity < 0.0 {
                return Err(ValidationError::invalid_format(
                    "emotion_intensity",
                    "must be a finite, non-negative number",
                ));
            }
        }

        if let Some(mut pain_points) = patch.pain_points {
            pain_points.truncate(MAX_SIGNAL_ITEMS);
            self.pain_points = pain_points;
        }
        if let Some(mut values) = patch.values {
            values.dedup();
            values.truncate(MAX_SIGNAL_ITEMS);
            self.values = values;
        }
        if let Some(mut needs) = patch.needs {
            needs.truncate(MAX_SIGNAL_ITEMS);
            self.needs = needs;
        }
        if let Some(emotion) = patch.dominant_emotion {
            self.dominant_emotion = emotion;
        }
        if let Some(intensity) = patch.emotion_intensity {
            self.emotion_intensity = intensity;
        }
        Ok(())
    }
}

/// Partial update of a participant's signals; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalsPatch {
    pub pain_points: Option<Vec<String>>,
    pub values: Option<Vec<ValueCategory>>,
    pub needs: Option<Vec<String>>,
    pub dominant_emotion: Option<EmotionCategory>,
    pub emotion_intensity: Option<f64>,
}

impl SignalsPatch {
    pub fn is_empty(&self) -> bool {
        self.pain_points.is_none()
            && self.values.is_none()
            && self.needs.is_none()
            && self.dominant_emotion.is_none()
            && self.emotion_intensity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals() -> ParticipantSignals {
        ParticipantSignals {
            participant_id: ParticipantId::new(1).unwrap(),
            participant_name: "Alex".to_string(),
            pain_points: vec!["I felt hurt".to_string()],
            values: vec![ValueCategory::Trust],
            needs: vec![],
            dominant_emotion: EmotionCategory::Sadness,
            emotion_intensity: 0.1,
        }
    }

    #[test]
    fn patch_replaces_only_given_fields() {
        let mut s = signals();
        s.apply_patch(SignalsPatch {
            needs: Some(vec!["I need time".to_string()]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(s.needs, vec!["I need time".to_string()]);
        assert_eq!(s.pain_points, vec!["I felt hurt".to_string()]);
        assert_eq!(s.dominant_emotion, EmotionCategory::Sadness);
    }

    #[test]
    fn patch_truncates_lists() {
        let mut s = signals();
        s.apply_patch(SignalsPatch {
            values: Some(ValueCategory::ALL.to_vec()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(s.values.len(), MAX_SIGNAL_ITEMS);
    }

    #[test]
    fn patch_rejects_negative_intensity_without_partial_update() {
        let mut s = signals();
        let result = s.apply_patch(SignalsPatch {
            needs: Some(vec!["I need space".to_string()]),
            emotion_intensity: Some(-0.5),
            ..Default::default()
        });
        assert!(result.is_err());
        assert!(s.needs.is_empty());
    }

    #[test]
    fn empty_patch_deserializes_from_empty_object() {
        let patch: SignalsPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }
}
