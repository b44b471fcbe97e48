//! Keyword classifier - lexicon-driven implementation of the classifier port.

use tracing::debug;

use crate::domain::analysis::{
    AnalysisOptions, EscalationCheck, EscalationDetector, NarrativeAnalyzer, ParticipantSignals,
};
use crate::domain::lexicon::Lexicon;
use crate::domain::mediation::Participant;
use crate::ports::NarrativeClassifier;

/// Deterministic classifier built on substring matching against a
/// [`Lexicon`].
///
/// # Example
///
/// ```ignore
/// let classifier = KeywordClassifier::new(Lexicon::builtin(), AnalysisOptions::default());
/// let check = classifier.detect_escalation("you always shut up");
/// assert!(check.flagged);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    lexicon: Lexicon,
    options: AnalysisOptions,
}

impl KeywordClassifier {
    pub fn new(lexicon: Lexicon, options: AnalysisOptions) -> Self {
        Self { lexicon, options }
    }

    /// Built-in lexicon with the given options.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self::new(Lexicon::builtin(), options)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }
}

impl NarrativeClassifier for KeywordClassifier {
    fn extract_signals(&self, participant: &Participant, text: &str) -> ParticipantSignals {
        let signals = NarrativeAnalyzer::signals_for(
            participant.id,
            &participant.display_name,
            text,
            &self.lexicon,
            self.options,
        );
        debug!(
            participant = %participant.id,
            pain_points = signals.pain_points.len(),
            values = signals.values.len(),
            needs = signals.needs.len(),
            emotion = signals.dominant_emotion.as_str(),
            intensity = signals.emotion_intensity,
            "Narrative analyzed"
        );
        signals
    }

    fn detect_escalation(&self, utterance: &str) -> EscalationCheck {
        EscalationDetector::detect(utterance, &self.lexicon)
    }
}
