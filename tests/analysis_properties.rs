//! Property tests for the narrative analyzers.

use proptest::prelude::*;

use peace_pact::domain::analysis::{EmotionClassifier, ParticipantSignals, SnapshotSynthesizer};
use peace_pact::domain::foundation::ParticipantId;
use peace_pact::domain::lexicon::{EmotionCategory, ValueCategory, DEFAULT_LEXICON};

fn value_category() -> impl Strategy<Value = ValueCategory> {
    prop::sample::select(ValueCategory::ALL.to_vec())
}

fn emotion_category() -> impl Strategy<Value = EmotionCategory> {
    prop::sample::select(EmotionCategory::ALL.to_vec())
}

fn signals(index: usize) -> impl Strategy<Value = ParticipantSignals> {
    (
        prop::collection::vec(value_category(), 0..4),
        emotion_category(),
        0.0f64..2.0,
    )
        .prop_map(move |(values, dominant_emotion, emotion_intensity)| {
            let id = ParticipantId::new(index as u8 + 1).unwrap();
            ParticipantSignals {
                participant_id: id,
                participant_name: format!("Participant {}", id),
                pain_points: Vec::new(),
                values,
                needs: Vec::new(),
                dominant_emotion,
                emotion_intensity,
            }
        })
}

fn roster() -> impl Strategy<Value = Vec<ParticipantSignals>> {
    (2usize..=6).prop_flat_map(|n| (0..n).map(signals).collect::<Vec<_>>())
}

/// Free text salted with emotion keywords.
fn narrative() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z ,.!?]{0,20}",
            Just("furious".to_string()),
            Just("sad".to_string()),
            Just("worried".to_string()),
            Just("HAPPY".to_string()),
            Just("hate".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn emotion_classification_is_deterministic(text in narrative()) {
        let first = EmotionClassifier::classify(&text, &DEFAULT_LEXICON);
        let second = EmotionClassifier::classify(&text, &DEFAULT_LEXICON);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.intensity >= 0.0);

        let best = first.scores.iter().map(|s| s.score).max().unwrap_or(0);
        prop_assert_eq!(first.intensity, best as f64 / 10.0);
    }

    #[test]
    fn common_values_are_exactly_repeated_categories(roster in roster()) {
        let common = SnapshotSynthesizer::common_values(&roster);

        for category in ValueCategory::ALL {
            let occurrences = roster
                .iter()
                .flat_map(|s| s.values.iter())
                .filter(|v| **v == category)
                .count();
            prop_assert_eq!(common.contains(&category), occurrences > 1, "{:?}", category);
        }

        for category in &common {
            prop_assert_eq!(common.iter().filter(|c| *c == category).count(), 1);
        }
    }

    #[test]
    fn snapshot_synthesis_is_idempotent(roster in roster()) {
        let first = SnapshotSynthesizer::synthesize(&roster);
        let second = SnapshotSynthesizer::synthesize(&roster);
        prop_assert_eq!(first, second);
    }
}
