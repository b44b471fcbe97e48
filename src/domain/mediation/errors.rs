//! Mediation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ParticipantId, ProposalId, ValidationError};

use super::phase::SessionPhase;

/// Reasons a session command is rejected. A rejected command leaves the
/// session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediationError {
    #[error("'{command}' is not permitted in phase {phase}: {reason}")]
    TransitionNotPermitted {
        command: &'static str,
        phase: SessionPhase,
        reason: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Participant not found: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("Proposal not found: {0}")]
    UnknownProposal(ProposalId),

    #[error("A proposal has already been selected for this session")]
    ProposalAlreadySelected,

    #[error("Feedback has already been submitted for this session")]
    FeedbackAlreadySubmitted,
}

impl MediationError {
    pub fn not_permitted(
        command: &'static str,
        phase: SessionPhase,
        reason: impl Into<String>,
    ) -> Self {
        MediationError::TransitionNotPermitted {
            command,
            phase,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MediationError::TransitionNotPermitted { .. } => ErrorCode::InvalidStateTransition,
            MediationError::Validation(err) => ErrorCode::from(err),
            MediationError::UnknownParticipant(_) => ErrorCode::ParticipantNotFound,
            MediationError::UnknownProposal(_) => ErrorCode::ProposalNotFound,
            MediationError::ProposalAlreadySelected => ErrorCode::ProposalAlreadySelected,
            MediationError::FeedbackAlreadySubmitted => ErrorCode::FeedbackAlreadySubmitted,
        }
    }
}
