//! Read-only projection of the session handed to the UI after every command.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ConflictSnapshot, ParticipantSignals, ResolutionProposal};
use crate::domain::foundation::{ParticipantId, SessionId, Timestamp};

use super::aggregate::MediationSession;
use super::draft::PeacePact;
use super::escalation::{EscalationStatus, EscalationWarning};
use super::narrative::Narrative;
use super::participant::Participant;
use super::phase::{RoundPhase, SessionPhase};
use super::round::MediationRound;

/// Copy of the texts guiding the current round phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundGuide {
    pub title: String,
    pub instruction: String,
    pub prompt: String,
}

impl From<RoundPhase> for RoundGuide {
    fn from(phase: RoundPhase) -> Self {
        Self {
            title: phase.title().to_string(),
            instruction: phase.instruction().to_string(),
            prompt: phase.prompt().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub phase: SessionPhase,
    pub consent_given: bool,
    pub participants: Vec<Participant>,
    pub current_participant: Option<ParticipantId>,
    pub narratives: Vec<Narrative>,
    pub signals: Vec<ParticipantSignals>,
    pub snapshot: Option<ConflictSnapshot>,
    pub snapshot_approved: bool,
    pub round: Option<MediationRound>,
    pub round_guide: Option<RoundGuide>,
    pub selected_proposal: Option<ResolutionProposal>,
    pub draft: Option<PeacePact>,
    pub escalation: EscalationStatus,
    /// Present only while inside its display window.
    pub escalation_warning: Option<EscalationWarning>,
    pub complete: bool,
    pub feedback_submitted: bool,
}

impl SessionView {
    pub fn of(session: &MediationSession, now: &Timestamp) -> Self {
        Self {
            session_id: *session.id(),
            phase: session.phase(),
            consent_given: session.consent().all_given(),
            participants: session.participants().to_vec(),
            current_participant: session.current_participant(),
            narratives: session.narratives().cloned().collect(),
            signals: session.signals().to_vec(),
            snapshot: session.snapshot().cloned(),
            snapshot_approved: session.is_snapshot_approved(),
            round: session.round().cloned(),
            round_guide: session.phase().round_phase().map(RoundGuide::from),
            selected_proposal: session.selected_proposal().cloned(),
            draft: session.draft().cloned(),
            escalation: session.escalation().clone(),
            escalation_warning: session.visible_warning(now).cloned(),
            complete: session.is_complete(),
            feedback_submitted: session.feedback().is_some(),
        }
    }
}
