//! Narrative Analyzer - pain points, values and needs from free text.
//!
//! Matching is plain case-insensitive substring search against the
//! [`Lexicon`]; nothing here is learned or probabilistic.

use crate::domain::foundation::ParticipantId;
use crate::domain::lexicon::{Lexicon, ValueCategory};

use super::emotion::EmotionClassifier;
use super::signals::{AnalysisOptions, NarrativeFindings, ParticipantSignals, MAX_SIGNAL_ITEMS};

/// Stateless extractor for narrative signals.
pub struct NarrativeAnalyzer;

impl NarrativeAnalyzer {
    /// Extracts pain points, values and needs from a narrative.
    ///
    /// # Edge Cases
    /// - Empty or whitespace-only text: all lists empty
    pub fn analyze(text: &str, lexicon: &Lexicon, options: AnalysisOptions) -> NarrativeFindings {
        NarrativeFindings {
            pain_points: Self::pain_points(text, lexicon),
            values: Self::values(text, lexicon),
            needs: Self::needs(text, lexicon, options.dedupe_needs),
        }
    }

    /// Full signal record for one participant: findings plus emotion.
    pub fn signals_for(
        participant_id: ParticipantId,
        participant_name: &str,
        text: &str,
        lexicon: &Lexicon,
        options: AnalysisOptions,
    ) -> ParticipantSignals {
        let findings = Self::analyze(text, lexicon, options);
        let emotion = EmotionClassifier::classify(text, lexicon);
        let intensity = if options.clamp_intensity {
            emotion.intensity.min(1.0)
        } else {
            emotion.intensity
        };

        ParticipantSignals {
            participant_id,
            participant_name: participant_name.to_string(),
            pain_points: findings.pain_points,
            values: findings.values,
            needs: findings.needs,
            dominant_emotion: emotion.dominant,
            emotion_intensity: intensity,
        }
    }

    /// Splits text into sentences on `.`, `!` and `?`.
    ///
    /// Runs of terminators collapse; blank pieces are dropped. Returned
    /// slices are untrimmed.
    pub fn sentences(text: &str) -> Vec<&str> {
        text.split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .collect()
    }

    /// First sentences containing a pain indicator, trimmed, in text order.
    pub fn pain_points(text: &str, lexicon: &Lexicon) -> Vec<String> {
        Self::sentences(text)
            .into_iter()
            .filter(|sentence| {
                let lower = sentence.to_lowercase();
                lexicon
                    .pain_indicators
                    .iter()
                    .any(|word| lower.contains(word.as_str()))
            })
            .take(MAX_SIGNAL_ITEMS)
            .map(|sentence| sentence.trim().to_string())
            .collect()
    }

    /// Value categories with at least one keyword anywhere in the text.
    pub fn values(text: &str, lexicon: &Lexicon) -> Vec<ValueCategory> {
        let lower = text.to_lowercase();
        lexicon
            .values
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(category, _)| *category)
            .take(MAX_SIGNAL_ITEMS)
            .collect()
    }

    /// Sentences expressing a first-person need.
    ///
    /// Phrases are scanned in table order, each over every sentence. A
    /// sentence is taken once per phrase but can be taken again by a later
    /// phrase unless `dedupe` is set.
    pub fn needs(text: &str, lexicon: &Lexicon, dedupe: bool) -> Vec<String> {
        let sentences = Self::sentences(text);
        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
        let mut needs: Vec<String> = Vec::new();

        for phrase in &lexicon.need_phrases {
            for (sentence, lower) in sentences.iter().zip(&lowered) {
                if needs.len() == MAX_SIGNAL_ITEMS {
                    return needs;
                }
                if !lower.contains(phrase.as_str()) {
                    continue;
                }
                let captured = sentence.trim().to_string();
                if dedupe && needs.contains(&captured) {
                    continue;
                }
                needs.push(captured);
            }
        }

        needs
    }
}
