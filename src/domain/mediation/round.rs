//! Dialogue round state: turn pointer, responses and proposals.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::ResolutionProposal;
use crate::domain::foundation::{ParticipantId, ProposalId, Timestamp};

use super::phase::RoundPhase;

/// One participant's contribution to a dialogue phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResponse {
    pub phase: RoundPhase,
    pub participant_id: ParticipantId,
    pub text: String,
    pub submitted_at: Timestamp,
}

/// State of the structured dialogue once the snapshot is approved.
///
/// # Invariants
///
/// - At most one response per `(phase, participant_id)`
/// - `current_participant` is `None` in resolution and once everyone has
///   spoken in a dialogue phase
/// - `selected_proposal`, once set, names an entry of `proposals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediationRound {
    pub phase: RoundPhase,
    pub current_participant: Option<ParticipantId>,
    pub responses: Vec<RoundResponse>,
    pub proposals: Vec<ResolutionProposal>,
    pub selected_proposal: Option<ProposalId>,
}

impl MediationRound {
    /// Opens the acknowledgment phase with participant 1 to speak.
    pub fn start() -> Self {
        Self {
            phase: RoundPhase::Acknowledgment,
            current_participant: Some(ParticipantId::from_index(0)),
            responses: Vec::new(),
            proposals: Vec::new(),
            selected_proposal: None,
        }
    }

    pub fn response(
        &self,
        phase: RoundPhase,
        participant_id: ParticipantId,
    ) -> Option<&RoundResponse> {
        self.responses
            .iter()
            .find(|r| r.phase == phase && r.participant_id == participant_id)
    }

    /// Responses recorded for one phase, in submission order.
    pub fn responses_for(&self, phase: RoundPhase) -> impl Iterator<Item = &RoundResponse> {
        self.responses.iter().filter(move |r| r.phase == phase)
    }

    /// Stores a response for the current phase, replacing any earlier one
    /// from the same participant.
    pub fn upsert(&mut self, participant_id: ParticipantId, text: String) {
        let phase = self.phase;
        let submitted_at = Timestamp::now();
        match self
            .responses
            .iter_mut()
            .find(|r| r.phase == phase && r.participant_id == participant_id)
        {
            Some(existing) => {
                existing.text = text;
                existing.submitted_at = submitted_at;
            }
            None => self.responses.push(RoundResponse {
                phase,
                participant_id,
                text,
                submitted_at,
            }),
        }
    }

    /// Moves the turn pointer past `participant_id` if it is the one
    /// speaking.
    pub fn advance_turn(&mut self, participant_id: ParticipantId, participant_count: usize) {
        if self.current_participant != Some(participant_id) {
            return;
        }
        let next = participant_id.index() + 1;
        self.current_participant =
            (next < participant_count).then(|| ParticipantId::from_index(next));
    }

    /// True when every participant has a response for the current phase.
    pub fn all_responded(&self, participant_count: usize) -> bool {
        (0..participant_count)
            .map(ParticipantId::from_index)
            .all(|id| self.response(self.phase, id).is_some())
    }

    /// Enters `phase`, resetting the turn pointer.
    pub fn enter(&mut self, phase: RoundPhase) {
        self.phase = phase;
        self.current_participant = phase.is_dialogue().then(|| ParticipantId::from_index(0));
    }

    pub fn proposal(&self, id: ProposalId) -> Option<&ResolutionProposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn selected(&self) -> Option<&ResolutionProposal> {
        self.selected_proposal.and_then(|id| self.proposal(id))
    }
}
