//! Inbound commands accepted by the mediation service.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::SignalsPatch;
use crate::domain::foundation::{ParticipantId, ProposalId};
use crate::domain::mediation::{ConsentFlags, ParticipantRegistration, RoundPhase};

/// Every mutation the UI can request.
///
/// Serialized with a `type` tag:
///
/// ```json
/// {"type": "submit_narrative", "participant_id": 1, "text": "I felt unheard."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommand {
    GiveConsent {
        flags: ConsentFlags,
    },
    RegisterParticipants {
        participants: Vec<ParticipantRegistration>,
    },
    SubmitNarrative {
        participant_id: ParticipantId,
        text: String,
    },
    SkipNarrative {
        participant_id: ParticipantId,
    },
    ApproveSnapshot,
    EditParticipantSignals {
        participant_id: ParticipantId,
        patch: SignalsPatch,
    },
    SubmitRoundResponse {
        phase: RoundPhase,
        participant_id: ParticipantId,
        text: String,
    },
    CompletePhase,
    SelectProposal {
        proposal_id: ProposalId,
    },
    PauseSession {
        #[serde(default)]
        reason: Option<String>,
    },
    ResumeSession,
    EndSession,
    EditDraft {
        text: String,
    },
    ApproveDraft,
    SubmitFeedback {
        rating: u8,
        #[serde(default)]
        helpful: String,
        #[serde(default)]
        suggestions: String,
        #[serde(default)]
        would_recommend: Option<bool>,
    },
    ResetSession,
}

impl SessionCommand {
    /// Wire name of the command, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            SessionCommand::GiveConsent { .. } => "give_consent",
            SessionCommand::RegisterParticipants { .. } => "register_participants",
            SessionCommand::SubmitNarrative { .. } => "submit_narrative",
            SessionCommand::SkipNarrative { .. } => "skip_narrative",
            SessionCommand::ApproveSnapshot => "approve_snapshot",
            SessionCommand::EditParticipantSignals { .. } => "edit_participant_signals",
            SessionCommand::SubmitRoundResponse { .. } => "submit_round_response",
            SessionCommand::CompletePhase => "complete_phase",
            SessionCommand::SelectProposal { .. } => "select_proposal",
            SessionCommand::PauseSession { .. } => "pause_session",
            SessionCommand::ResumeSession => "resume_session",
            SessionCommand::EndSession => "end_session",
            SessionCommand::EditDraft { .. } => "edit_draft",
            SessionCommand::ApproveDraft => "approve_draft",
            SessionCommand::SubmitFeedback { .. } => "submit_feedback",
            SessionCommand::ResetSession => "reset_session",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let cmd: SessionCommand = serde_json::from_str(
            r#"{"type": "submit_narrative", "participant_id": 1, "text": "I felt unheard."}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            SessionCommand::SubmitNarrative {
                participant_id: ParticipantId::new(1).unwrap(),
                text: "I felt unheard.".to_string(),
            }
        );
    }

    #[test]
    fn unit_commands_need_only_type() {
        let cmd: SessionCommand = serde_json::from_str(r#"{"type": "approve_snapshot"}"#).unwrap();
        assert_eq!(cmd, SessionCommand::ApproveSnapshot);
    }

    #[test]
    fn pause_reason_is_optional() {
        let cmd: SessionCommand = serde_json::from_str(r#"{"type": "pause_session"}"#).unwrap();
        assert_eq!(cmd, SessionCommand::PauseSession { reason: None });
    }

    #[test]
    fn participant_zero_is_rejected_at_parse_time() {
        let parsed: Result<SessionCommand, _> =
            serde_json::from_str(r#"{"type": "skip_narrative", "participant_id": 0}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn name_matches_serde_tag() {
        let commands = vec![
            SessionCommand::CompletePhase,
            SessionCommand::ResetSession,
            SessionCommand::PauseSession { reason: None },
            SessionCommand::EditDraft { text: "x".to_string() },
        ];
        for cmd in commands {
            let json = serde_json::to_value(&cmd).unwrap();
            assert_eq!(json["type"], cmd.name());
        }
    }
}
