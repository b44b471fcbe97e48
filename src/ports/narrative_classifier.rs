//! NarrativeClassifier port - Interface for turning text into signals.
//!
//! The session engine never calls the analyzers directly; it goes through
//! this port so a different classifier can be plugged in without touching
//! the state machine.

use crate::domain::analysis::{EscalationCheck, ParticipantSignals};
use crate::domain::mediation::Participant;

/// Port for narrative classification and escalation detection.
///
/// Implementations must be deterministic: the same text always yields the
/// same signals and the same escalation verdict.
pub trait NarrativeClassifier: Send + Sync {
    /// Extract signals from one participant's narrative. Empty text yields
    /// empty lists and a neutral emotion.
    fn extract_signals(&self, participant: &Participant, text: &str) -> ParticipantSignals;

    /// Check one dialogue utterance for escalation language.
    fn detect_escalation(&self, utterance: &str) -> EscalationCheck;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn NarrativeClassifier) {}
}
