//! Escalation state held by the session.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, Timestamp};

use super::phase::RoundPhase;

/// Pause flag set by an explicit pause and cleared on resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationStatus {
    pub detected: bool,
    pub reason: Option<String>,
}

impl EscalationStatus {
    pub fn paused(reason: impl Into<String>) -> Self {
        Self {
            detected: true,
            reason: Some(reason.into()),
        }
    }

    pub fn clear() -> Self {
        Self::default()
    }
}

/// Timed notice raised when a round response contains trigger language.
///
/// Detection itself is stateless; this records when it last fired so the
/// notice can be hidden once the display window passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationWarning {
    pub trigger: String,
    pub participant_id: ParticipantId,
    pub phase: RoundPhase,
    pub raised_at: Timestamp,
}

impl EscalationWarning {
    pub fn new(
        trigger: impl Into<String>,
        participant_id: ParticipantId,
        phase: RoundPhase,
        raised_at: Timestamp,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            participant_id,
            phase,
            raised_at,
        }
    }

    /// True while `now` is within `window` of the warning being raised.
    pub fn is_visible_at(&self, now: &Timestamp, window: Duration) -> bool {
        now.duration_since(&self.raised_at) < window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning_at(secs: u64) -> EscalationWarning {
        EscalationWarning::new(
            "shut up",
            ParticipantId::new(1).unwrap(),
            RoundPhase::Acknowledgment,
            Timestamp::from_unix_secs(secs),
        )
    }

    #[test]
    fn visible_inside_window() {
        let warning = warning_at(1_000);
        let window = Duration::seconds(5);
        assert!(warning.is_visible_at(&Timestamp::from_unix_secs(1_000), window));
        assert!(warning.is_visible_at(&Timestamp::from_unix_secs(1_004), window));
    }

    #[test]
    fn hidden_once_window_elapses() {
        let warning = warning_at(1_000);
        let window = Duration::seconds(5);
        assert!(!warning.is_visible_at(&Timestamp::from_unix_secs(1_005), window));
        assert!(!warning.is_visible_at(&Timestamp::from_unix_secs(2_000), window));
    }

    #[test]
    fn paused_status_carries_reason() {
        let status = EscalationStatus::paused("cooling down");
        assert!(status.detected);
        assert_eq!(status.reason.as_deref(), Some("cooling down"));
        assert_eq!(EscalationStatus::clear(), EscalationStatus::default());
    }
}
