//! MediationSession aggregate.
//!
//! Owns every piece of session state and is the only place it changes.
//! Each command validates first and mutates only once it cannot fail, so a
//! rejected command leaves the session exactly as it was.

use tracing::{debug, info, warn};

use crate::domain::analysis::{
    ConflictSnapshot, EscalationCheck, ParticipantSignals, ProposalGenerator, ResolutionProposal,
    SignalsPatch, SnapshotSynthesizer,
};
use crate::domain::foundation::{
    ParticipantId, ProposalId, Rating, SessionId, StateMachine, Timestamp, ValidationError,
};
use crate::ports::NarrativeClassifier;

use super::consent::ConsentFlags;
use super::draft::PeacePact;
use super::errors::MediationError;
use super::escalation::{EscalationStatus, EscalationWarning};
use super::feedback::SessionFeedback;
use super::narrative::Narrative;
use super::participant::{Participant, ParticipantRegistration};
use super::phase::{RoundPhase, SessionPhase};
use super::round::MediationRound;
use super::settings::SessionSettings;
use super::view::SessionView;

/// Root aggregate for one mediation session.
///
/// # Invariants
///
/// - `participants`, `narratives` and (after intake) `signals` are indexed
///   by participant position
/// - `snapshot` exists from alignment review onward and is frozen once
///   `snapshot_approved` is set
/// - `round` exists from the acknowledgment round onward
/// - `draft` and `selected_proposal` exist from draft review onward
#[derive(Debug, Clone)]
pub struct MediationSession {
    id: SessionId,
    settings: SessionSettings,
    phase: SessionPhase,
    consent: ConsentFlags,
    participants: Vec<Participant>,
    intake_cursor: usize,
    narratives: Vec<Option<Narrative>>,
    signals: Vec<ParticipantSignals>,
    snapshot: Option<ConflictSnapshot>,
    snapshot_approved: bool,
    round: Option<MediationRound>,
    selected_proposal: Option<ResolutionProposal>,
    draft: Option<PeacePact>,
    escalation: EscalationStatus,
    warning: Option<EscalationWarning>,
    complete: bool,
    feedback: Option<SessionFeedback>,
    started_at: Timestamp,
}

impl MediationSession {
    /// Creates a fresh session awaiting consent.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            id: SessionId::new(),
            settings,
            phase: SessionPhase::ConsentPending,
            consent: ConsentFlags::default(),
            participants: Vec::new(),
            intake_cursor: 0,
            narratives: Vec::new(),
            signals: Vec::new(),
            snapshot: None,
            snapshot_approved: false,
            round: None,
            selected_proposal: None,
            draft: None,
            escalation: EscalationStatus::clear(),
            warning: None,
            complete: false,
            feedback: None,
            started_at: Timestamp::now(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn consent(&self) -> &ConsentFlags {
        &self.consent
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Narratives submitted so far, skipped participants omitted.
    pub fn narratives(&self) -> impl Iterator<Item = &Narrative> {
        self.narratives.iter().flatten()
    }

    pub fn narrative(&self, participant_id: ParticipantId) -> Option<&Narrative> {
        self.narratives.get(participant_id.index())?.as_ref()
    }

    pub fn signals(&self) -> &[ParticipantSignals] {
        &self.signals
    }

    pub fn snapshot(&self) -> Option<&ConflictSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_snapshot_approved(&self) -> bool {
        self.snapshot_approved
    }

    pub fn round(&self) -> Option<&MediationRound> {
        self.round.as_ref()
    }

    pub fn selected_proposal(&self) -> Option<&ResolutionProposal> {
        self.selected_proposal.as_ref()
    }

    pub fn draft(&self) -> Option<&PeacePact> {
        self.draft.as_ref()
    }

    pub fn escalation(&self) -> &EscalationStatus {
        &self.escalation
    }

    /// Most recent escalation warning, whether or not it is still visible.
    pub fn warning(&self) -> Option<&EscalationWarning> {
        self.warning.as_ref()
    }

    /// Warning to display at `now`, if its window has not elapsed.
    pub fn visible_warning(&self, now: &Timestamp) -> Option<&EscalationWarning> {
        self.warning
            .as_ref()
            .filter(|w| w.is_visible_at(now, self.settings.escalation_window()))
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn feedback(&self) -> Option<&SessionFeedback> {
        self.feedback.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Whose turn it is: the intake cursor during intake, the round
    /// pointer during a dialogue round.
    pub fn current_participant(&self) -> Option<ParticipantId> {
        match self.phase {
            SessionPhase::Intake => (self.intake_cursor < self.participants.len())
                .then(|| ParticipantId::from_index(self.intake_cursor)),
            SessionPhase::Round(_) | SessionPhase::Paused(_) => {
                self.round.as_ref().and_then(|r| r.current_participant)
            }
            _ => None,
        }
    }

    /// Read-only projection for the UI.
    pub fn view(&self, now: &Timestamp) -> SessionView {
        SessionView::of(self, now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Consent and registration
    // ─────────────────────────────────────────────────────────────────────────

    /// Records consent and opens identity setup.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` outside consent
    /// - `Validation` unless all four flags are set
    pub fn give_consent(&mut self, flags: ConsentFlags) -> Result<(), MediationError> {
        let next = self.check_transition("give_consent", SessionPhase::IdentitySetup)?;
        if !flags.all_given() {
            return Err(ValidationError::invalid_format(
                "consent",
                format!("missing: {}", flags.missing().join(", ")),
            )
            .into());
        }

        self.consent = flags;
        self.enter(next);
        Ok(())
    }

    /// Registers the roster and opens intake for participant 1.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` outside identity setup
    /// - `Validation` for a roster outside 2..=6 or an unnamed entry
    pub fn register_participants(
        &mut self,
        registrations: &[ParticipantRegistration],
    ) -> Result<(), MediationError> {
        let next = self.check_transition("register_participants", SessionPhase::Intake)?;
        let participants = Participant::register_all(registrations)?;

        self.narratives = vec![None; participants.len()];
        self.participants = participants;
        self.intake_cursor = 0;
        self.enter(next);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Intake and alignment
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores a participant's narrative.
    ///
    /// During intake the current participant's submission advances the
    /// cursor; an earlier participant overwrites without advancing. During
    /// alignment review any participant may overwrite, and their signals and
    /// the snapshot are recomputed.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` outside intake and alignment review, or
    ///   for a participant whose turn has not come
    /// - `UnknownParticipant` for an unregistered id
    /// - `Validation` for blank text
    pub fn submit_narrative(
        &mut self,
        participant_id: ParticipantId,
        text: &str,
        classifier: &dyn NarrativeClassifier,
    ) -> Result<(), MediationError> {
        const COMMAND: &str = "submit_narrative";
        self.ensure_phase(COMMAND, |p| {
            matches!(p, SessionPhase::Intake | SessionPhase::AlignmentReview)
        })?;
        let index = self.participant_index(participant_id)?;
        let narrative = Narrative::new(participant_id, text)?;

        match self.phase {
            SessionPhase::Intake => {
                if index > self.intake_cursor {
                    return Err(self.not_your_turn(COMMAND, participant_id));
                }
                self.narratives[index] = Some(narrative);
                if index == self.intake_cursor {
                    self.advance_intake(classifier);
                }
            }
            _ => {
                self.narratives[index] = Some(narrative);
                let signals = self.extract(index, classifier);
                self.signals[index] = signals;
                self.resynthesize();
            }
        }
        Ok(())
    }

    /// Passes over the current participant without a narrative.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` outside intake or for anyone but the
    ///   current participant
    /// - `UnknownParticipant` for an unregistered id
    pub fn skip_narrative(
        &mut self,
        participant_id: ParticipantId,
        classifier: &dyn NarrativeClassifier,
    ) -> Result<(), MediationError> {
        const COMMAND: &str = "skip_narrative";
        self.ensure_phase(COMMAND, |p| p == SessionPhase::Intake)?;
        let index = self.participant_index(participant_id)?;
        if index != self.intake_cursor {
            return Err(self.not_your_turn(COMMAND, participant_id));
        }

        debug!(session_id = %self.id, participant = %participant_id, "Narrative skipped");
        self.advance_intake(classifier);
        Ok(())
    }

    /// Applies a manual correction to one participant's signals and
    /// rebuilds the snapshot.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` outside alignment review
    /// - `UnknownParticipant` for an unregistered id
    /// - `Validation` for an invalid intensity
    pub fn edit_participant_signals(
        &mut self,
        participant_id: ParticipantId,
        patch: SignalsPatch,
    ) -> Result<(), MediationError> {
        self.ensure_phase("edit_participant_signals", |p| {
            p == SessionPhase::AlignmentReview
        })?;
        let index = self.participant_index(participant_id)?;

        let mut edited = self.signals[index].clone();
        edited.apply_patch(patch)?;
        self.signals[index] = edited;
        self.resynthesize();
        Ok(())
    }

    /// Freezes the snapshot and opens the acknowledgment round.
    pub fn approve_snapshot(&mut self) -> Result<(), MediationError> {
        let next = self.check_transition(
            "approve_snapshot",
            SessionPhase::Round(RoundPhase::Acknowledgment),
        )?;

        self.snapshot_approved = true;
        self.round = Some(MediationRound::start());
        self.enter(next);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rounds
    // ─────────────────────────────────────────────────────────────────────────

    /// Records a dialogue response and checks it for escalation language.
    ///
    /// The current speaker's response passes the turn on; earlier speakers
    /// may revise theirs. A flagged response raises a timed warning but does
    /// not pause the session.
    ///
    /// # Errors
    ///
    /// - `TransitionNotPermitted` unless the session is in `phase` and it is
    ///   a dialogue phase, or when the participant's turn has not come
    /// - `UnknownParticipant` for an unregistered id
    /// - `Validation` for blank text
    pub fn submit_round_response(
        &mut self,
        phase: RoundPhase,
        participant_id: ParticipantId,
        text: &str,
        classifier: &dyn NarrativeClassifier,
    ) -> Result<EscalationCheck, MediationError> {
        const COMMAND: &str = "submit_round_response";
        self.ensure_phase(COMMAND, |p| {
            p == SessionPhase::Round(phase) && phase.is_dialogue()
        })?;
        let index = self.participant_index(participant_id)?;
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("response").into());
        }
        let count = self.participants.len();
        let current = self.round_mut(COMMAND)?.current_participant;
        if current.is_some_and(|c| index > c.index()) {
            return Err(self.not_your_turn(COMMAND, participant_id));
        }

        let round = self.round_mut(COMMAND)?;
        round.upsert(participant_id, text.trim().to_string());
        round.advance_turn(participant_id, count);

        let check = classifier.detect_escalation(text);
        if let Some(trigger) = &check.trigger {
            warn!(
                session_id = %self.id,
                participant = %participant_id,
                phase = %phase,
                trigger = %trigger,
                "Escalation language detected"
            );
            self.warning = Some(EscalationWarning::new(
                trigger.clone(),
                participant_id,
                phase,
                Timestamp::now(),
            ));
        }
        Ok(check)
    }

    /// Finishes the current round phase.
    ///
    /// Dialogue phases require a response from everyone; entering
    /// resolution generates the proposals. Completing resolution requires a
    /// selection, drafts the Peace Pact and opens draft review.
    pub fn complete_phase(&mut self) -> Result<(), MediationError> {
        const COMMAND: &str = "complete_phase";
        let Some(current) = self.phase.round_phase().filter(|_| !self.phase.is_paused()) else {
            return Err(MediationError::not_permitted(
                COMMAND,
                self.phase,
                "no round is in progress",
            ));
        };
        let count = self.participants.len();

        match current.next() {
            Some(next_round) => {
                let next = self.check_transition(COMMAND, SessionPhase::Round(next_round))?;
                if !self.round_mut(COMMAND)?.all_responded(count) {
                    return Err(MediationError::not_permitted(
                        COMMAND,
                        self.phase,
                        "every participant must respond first",
                    ));
                }

                let proposals = match (next_round, &self.snapshot) {
                    (RoundPhase::Resolution, Some(snapshot)) => {
                        ProposalGenerator::generate(snapshot)
                    }
                    _ => Vec::new(),
                };
                let round = self.round_mut(COMMAND)?;
                round.enter(next_round);
                if !proposals.is_empty() {
                    round.proposals = proposals;
                }
                self.enter(next);
            }
            None => {
                let next = self.check_transition(COMMAND, SessionPhase::DraftReview)?;
                let Some(proposal) = self.round_mut(COMMAND)?.selected().cloned() else {
                    return Err(MediationError::not_permitted(
                        COMMAND,
                        self.phase,
                        "a proposal must be selected first",
                    ));
                };

                self.draft = Some(PeacePact::draft(
                    &self.id,
                    &self.participants,
                    &proposal,
                    &Timestamp::now(),
                ));
                self.selected_proposal = Some(proposal);
                self.enter(next);
            }
        }
        Ok(())
    }

    /// Chooses one of the generated proposals. Allowed once per session.
    pub fn select_proposal(&mut self, proposal_id: ProposalId) -> Result<(), MediationError> {
        const COMMAND: &str = "select_proposal";
        self.ensure_phase(COMMAND, |p| p == SessionPhase::Round(RoundPhase::Resolution))?;
        let round = self.round_mut(COMMAND)?;
        if round.selected_proposal.is_some() {
            return Err(MediationError::ProposalAlreadySelected);
        }
        if round.proposal(proposal_id).is_none() {
            return Err(MediationError::UnknownProposal(proposal_id));
        }

        round.selected_proposal = Some(proposal_id);
        debug!(session_id = %self.id, proposal = %proposal_id, "Proposal selected");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pause
    // ─────────────────────────────────────────────────────────────────────────

    /// Pauses the current round. A blank or missing reason uses the
    /// configured default.
    pub fn pause(&mut self, reason: Option<&str>) -> Result<(), MediationError> {
        const COMMAND: &str = "pause_session";
        let Some(round_phase) = self.phase.round_phase() else {
            return Err(MediationError::not_permitted(
                COMMAND,
                self.phase,
                "only a round can be paused",
            ));
        };
        let next = self.check_transition(COMMAND, SessionPhase::Paused(round_phase))?;

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(self.settings.default_pause_reason.as_str())
            .to_string();
        warn!(session_id = %self.id, reason = %reason, "Session paused");
        self.escalation = EscalationStatus::paused(reason);
        self.enter(next);
        Ok(())
    }

    /// Returns to the round that was paused.
    pub fn resume(&mut self) -> Result<(), MediationError> {
        const COMMAND: &str = "resume_session";
        let round_phase = match self.phase {
            SessionPhase::Paused(phase) => phase,
            other => {
                return Err(MediationError::not_permitted(
                    COMMAND,
                    other,
                    "session is not paused",
                ))
            }
        };
        let next = self.check_transition(COMMAND, SessionPhase::Round(round_phase))?;

        self.escalation = EscalationStatus::clear();
        self.enter(next);
        Ok(())
    }

    /// Ends a paused session for good. Nothing can be resumed afterwards;
    /// the aggregate starts over as a new session.
    pub fn end(&mut self) -> Result<(), MediationError> {
        self.ensure_phase("end_session", |p| p.is_paused())?;
        info!(session_id = %self.id, "Session ended during pause");
        self.reset();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft, completion, feedback
    // ─────────────────────────────────────────────────────────────────────────

    pub fn edit_draft(&mut self, content: &str) -> Result<(), MediationError> {
        const COMMAND: &str = "edit_draft";
        self.ensure_phase(COMMAND, |p| p == SessionPhase::DraftReview)?;
        let phase = self.phase;
        let draft = self.draft.as_mut().ok_or_else(|| {
            MediationError::not_permitted(COMMAND, phase, "no draft has been prepared")
        })?;
        draft.edit(content)?;
        Ok(())
    }

    pub fn approve_draft(&mut self) -> Result<(), MediationError> {
        let next = self.check_transition("approve_draft", SessionPhase::Complete)?;
        self.complete = true;
        self.enter(next);
        Ok(())
    }

    /// Records feedback on a completed session. Allowed once.
    pub fn submit_feedback(
        &mut self,
        rating: u8,
        helpful: &str,
        suggestions: &str,
        would_recommend: Option<bool>,
    ) -> Result<(), MediationError> {
        self.ensure_phase("submit_feedback", |p| p == SessionPhase::Complete)?;
        if self.feedback.is_some() {
            return Err(MediationError::FeedbackAlreadySubmitted);
        }
        let rating = Rating::try_from_u8(rating)?;

        info!(session_id = %self.id, rating = %rating, "Feedback received");
        self.feedback = Some(SessionFeedback::new(rating, helpful, suggestions, would_recommend));
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Discards everything and starts a new session with a new id. Allowed
    /// from any phase.
    pub fn reset(&mut self) {
        let previous = self.id;
        *self = Self::new(self.settings.clone());
        info!(previous_session_id = %previous, session_id = %self.id, "Session reset");
    }

    /// Hides the escalation warning once its display window has passed.
    /// Returns true if a warning was cleared.
    pub fn expire_warning(&mut self, now: &Timestamp) -> bool {
        let window = self.settings.escalation_window();
        match &self.warning {
            Some(warning) if !warning.is_visible_at(now, window) => {
                self.warning = None;
                true
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn check_transition(
        &self,
        command: &'static str,
        target: SessionPhase,
    ) -> Result<SessionPhase, MediationError> {
        self.phase.transition_to(target).map_err(|err| {
            debug!(session_id = %self.id, command, phase = %self.phase, "Command rejected");
            MediationError::not_permitted(command, self.phase, err.to_string())
        })
    }

    fn ensure_phase(
        &self,
        command: &'static str,
        allowed: impl Fn(SessionPhase) -> bool,
    ) -> Result<(), MediationError> {
        if allowed(self.phase) {
            Ok(())
        } else {
            debug!(session_id = %self.id, command, phase = %self.phase, "Command rejected");
            Err(MediationError::not_permitted(
                command,
                self.phase,
                "not available in this phase",
            ))
        }
    }

    fn enter(&mut self, next: SessionPhase) {
        info!(session_id = %self.id, from = %self.phase, to = %next, "Session phase changed");
        self.phase = next;
    }

    fn participant_index(&self, participant_id: ParticipantId) -> Result<usize, MediationError> {
        let index = participant_id.index();
        if index < self.participants.len() {
            Ok(index)
        } else {
            Err(MediationError::UnknownParticipant(participant_id))
        }
    }

    fn not_your_turn(
        &self,
        command: &'static str,
        participant_id: ParticipantId,
    ) -> MediationError {
        MediationError::not_permitted(
            command,
            self.phase,
            format!("participant {} has not reached their turn", participant_id),
        )
    }

    fn round_mut(&mut self, command: &'static str) -> Result<&mut MediationRound, MediationError> {
        let phase = self.phase;
        self.round
            .as_mut()
            .ok_or_else(|| MediationError::not_permitted(command, phase, "no round is in progress"))
    }

    fn extract(&self, index: usize, classifier: &dyn NarrativeClassifier) -> ParticipantSignals {
        let text = self.narratives[index]
            .as_ref()
            .map(|n| n.text.as_str())
            .unwrap_or("");
        classifier.extract_signals(&self.participants[index], text)
    }

    fn advance_intake(&mut self, classifier: &dyn NarrativeClassifier) {
        self.intake_cursor += 1;
        if self.intake_cursor < self.participants.len() {
            return;
        }

        let signals = (0..self.participants.len())
            .map(|index| self.extract(index, classifier))
            .collect();
        self.signals = signals;
        self.resynthesize();
        self.enter(SessionPhase::AlignmentReview);
    }

    fn resynthesize(&mut self) {
        let snapshot = SnapshotSynthesizer::synthesize(&self.signals);
        debug!(
            session_id = %self.id,
            common_values = %snapshot.common_values_label(),
            tone = ?snapshot.emotional_pattern.overall_tone,
            "Conflict snapshot synthesized"
        );
        self.snapshot = Some(snapshot);
    }
}

impl Default for MediationSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::classifier::KeywordClassifier;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::lexicon::{EmotionCategory, ValueCategory};

    const ALEX: &str = "I am so frustrated and I need more respect. We never talk.";
    const JORDAN: &str = "I want respect too. Honestly I feel ignored.";

    fn pid(n: u8) -> ParticipantId {
        ParticipantId::new(n).unwrap()
    }

    fn classifier() -> KeywordClassifier {
        KeywordClassifier::default()
    }

    fn roster() -> Vec<ParticipantRegistration> {
        vec![
            ParticipantRegistration::alias("Alex"),
            ParticipantRegistration::preferred_name("Jordan"),
        ]
    }

    fn in_intake() -> MediationSession {
        let mut session = MediationSession::default();
        session.give_consent(ConsentFlags::granted()).unwrap();
        session.register_participants(&roster()).unwrap();
        session
    }

    fn in_alignment() -> MediationSession {
        let c = classifier();
        let mut session = in_intake();
        session.submit_narrative(pid(1), ALEX, &c).unwrap();
        session.submit_narrative(pid(2), JORDAN, &c).unwrap();
        session
    }

    fn in_round() -> MediationSession {
        let mut session = in_alignment();
        session.approve_snapshot().unwrap();
        session
    }

    fn respond_all(session: &mut MediationSession, phase: RoundPhase) {
        let c = classifier();
        session.submit_round_response(phase, pid(1), "I hear you", &c).unwrap();
        session.submit_round_response(phase, pid(2), "Thank you", &c).unwrap();
    }

    fn in_resolution() -> MediationSession {
        let mut session = in_round();
        respond_all(&mut session, RoundPhase::Acknowledgment);
        session.complete_phase().unwrap();
        respond_all(&mut session, RoundPhase::Clarification);
        session.complete_phase().unwrap();
        session
    }

    fn in_draft_review() -> MediationSession {
        let mut session = in_resolution();
        session.select_proposal(ProposalId::new(2)).unwrap();
        session.complete_phase().unwrap();
        session
    }

    fn assert_not_permitted(result: Result<(), MediationError>) {
        assert_eq!(result.unwrap_err().code(), ErrorCode::InvalidStateTransition);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Consent and registration
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_session_awaits_consent() {
        let session = MediationSession::default();
        assert_eq!(session.phase(), SessionPhase::ConsentPending);
        assert!(session.participants().is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn partial_consent_is_rejected_without_change() {
        let mut session = MediationSession::default();
        let flags = ConsentFlags {
            emotional_safety: true,
            ..Default::default()
        };
        let err = session.give_consent(flags).unwrap_err();
        assert!(matches!(err, MediationError::Validation(_)));
        assert_eq!(session.phase(), SessionPhase::ConsentPending);
        assert_eq!(*session.consent(), ConsentFlags::default());
    }

    #[test]
    fn consent_cannot_be_given_twice() {
        let mut session = MediationSession::default();
        session.give_consent(ConsentFlags::granted()).unwrap();
        assert_not_permitted(session.give_consent(ConsentFlags::granted()));
    }

    #[test]
    fn registration_opens_intake_for_first_participant() {
        let session = in_intake();
        assert_eq!(session.phase(), SessionPhase::Intake);
        assert_eq!(session.participants()[0].display_name, "Alex");
        assert_eq!(session.participants()[1].display_name, "Jordan");
        assert_eq!(session.current_participant(), Some(pid(1)));
    }

    #[test]
    fn registration_before_consent_is_not_permitted() {
        let mut session = MediationSession::default();
        assert_not_permitted(session.register_participants(&roster()));
    }

    #[test]
    fn oversized_roster_is_rejected() {
        let mut session = MediationSession::default();
        session.give_consent(ConsentFlags::granted()).unwrap();
        let err = session
            .register_participants(&vec![ParticipantRegistration::alias("X"); 7])
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfRange);
        assert_eq!(session.phase(), SessionPhase::IdentitySetup);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Intake
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn later_participant_cannot_jump_the_queue() {
        let mut session = in_intake();
        let result = session.submit_narrative(pid(2), JORDAN, &classifier());
        assert_not_permitted(result);
        assert!(session.narrative(pid(2)).is_none());
    }

    #[test]
    fn earlier_participant_overwrites_without_advancing() {
        let c = classifier();
        let mut session = in_intake();
        session.submit_narrative(pid(1), "first take", &c).unwrap();
        assert_eq!(session.current_participant(), Some(pid(2)));

        session.submit_narrative(pid(1), "second take", &c).unwrap();
        assert_eq!(session.narrative(pid(1)).unwrap().text, "second take");
        assert_eq!(session.current_participant(), Some(pid(2)));
        assert_eq!(session.phase(), SessionPhase::Intake);
    }

    #[test]
    fn unknown_participant_is_rejected() {
        let mut session = in_intake();
        let err = session
            .submit_narrative(pid(5), ALEX, &classifier())
            .unwrap_err();
        assert_eq!(err, MediationError::UnknownParticipant(pid(5)));
    }

    #[test]
    fn blank_narrative_is_a_validation_error() {
        let mut session = in_intake();
        let err = session.submit_narrative(pid(1), "  ", &classifier()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EmptyField);
        assert_eq!(session.current_participant(), Some(pid(1)));
    }

    #[test]
    fn last_submission_builds_signals_and_snapshot() {
        let session = in_alignment();
        assert_eq!(session.phase(), SessionPhase::AlignmentReview);
        assert_eq!(session.signals().len(), 2);

        let alex = &session.signals()[0];
        assert_eq!(alex.participant_name, "Alex");
        assert_eq!(alex.dominant_emotion, EmotionCategory::Anger);
        assert!(alex.values.contains(&ValueCategory::Respect));

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.common_values, vec![ValueCategory::Respect]);
        assert!(!session.is_snapshot_approved());
    }

    #[test]
    fn skip_only_for_current_participant() {
        let c = classifier();
        let mut session = in_intake();
        assert_not_permitted(session.skip_narrative(pid(2), &c));

        session.skip_narrative(pid(1), &c).unwrap();
        session.submit_narrative(pid(2), JORDAN, &c).unwrap();
        assert_eq!(session.phase(), SessionPhase::AlignmentReview);

        let skipped = &session.signals()[0];
        assert!(skipped.pain_points.is_empty());
        assert_eq!(skipped.dominant_emotion, EmotionCategory::Neutral);
        assert_eq!(session.narratives().count(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Alignment review
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn overwrite_in_alignment_recomputes_snapshot() {
        let mut session = in_alignment();
        session
            .submit_narrative(pid(2), "I feel calm about it.", &classifier())
            .unwrap();
        assert!(session.snapshot().unwrap().common_values.is_empty());
        assert_eq!(session.phase(), SessionPhase::AlignmentReview);
    }

    #[test]
    fn signal_edit_rebuilds_snapshot() {
        let mut session = in_alignment();
        let patch = SignalsPatch {
            values: Some(vec![ValueCategory::Fairness]),
            ..Default::default()
        };
        session.edit_participant_signals(pid(1), patch).unwrap();
        assert_eq!(session.signals()[0].values, vec![ValueCategory::Fairness]);
        assert!(session.snapshot().unwrap().common_values.is_empty());
    }

    #[test]
    fn invalid_signal_edit_changes_nothing() {
        let mut session = in_alignment();
        let before = session.signals()[0].clone();
        let patch = SignalsPatch {
            pain_points: Some(vec!["changed".to_string()]),
            emotion_intensity: Some(-1.0),
            ..Default::default()
        };
        assert!(session.edit_participant_signals(pid(1), patch).is_err());
        assert_eq!(session.signals()[0], before);
    }

    #[test]
    fn approval_freezes_snapshot() {
        let mut session = in_round();
        assert!(session.is_snapshot_approved());
        assert_eq!(session.phase(), SessionPhase::Round(RoundPhase::Acknowledgment));
        assert_not_permitted(session.edit_participant_signals(pid(1), SignalsPatch::default()));
        assert_not_permitted(session.submit_narrative(pid(1), ALEX, &classifier()));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rounds
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn phase_cannot_complete_until_everyone_responds() {
        let mut session = in_round();
        assert_not_permitted(session.complete_phase());

        session
            .submit_round_response(RoundPhase::Acknowledgment, pid(1), "I hear you", &classifier())
            .unwrap();
        assert_not_permitted(session.complete_phase());
        assert_eq!(session.phase(), SessionPhase::Round(RoundPhase::Acknowledgment));

        session
            .submit_round_response(RoundPhase::Acknowledgment, pid(2), "Me too", &classifier())
            .unwrap();
        session.complete_phase().unwrap();
        assert_eq!(session.phase(), SessionPhase::Round(RoundPhase::Clarification));
        assert_eq!(session.current_participant(), Some(pid(1)));
    }

    #[test]
    fn response_for_other_phase_is_rejected() {
        let mut session = in_round();
        let result = session.submit_round_response(
            RoundPhase::Clarification,
            pid(1),
            "too early",
            &classifier(),
        );
        assert_eq!(
            result.unwrap_err().code(),
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn later_speaker_must_wait() {
        let mut session = in_round();
        let result = session.submit_round_response(
            RoundPhase::Acknowledgment,
            pid(2),
            "me first",
            &classifier(),
        );
        assert!(result.is_err());
        assert!(session.round().unwrap().responses.is_empty());
    }

    #[test]
    fn escalation_raises_timed_warning_without_pausing() {
        let mut session = in_round();
        let check = session
            .submit_round_response(
                RoundPhase::Acknowledgment,
                pid(1),
                "you always shut up",
                &classifier(),
            )
            .unwrap();
        assert!(check.flagged);
        assert_eq!(session.phase(), SessionPhase::Round(RoundPhase::Acknowledgment));

        let warning = session.warning().unwrap().clone();
        assert_eq!(warning.participant_id, pid(1));
        assert!(session.visible_warning(&warning.raised_at).is_some());

        let later = warning.raised_at.plus_secs(5);
        assert!(session.visible_warning(&later).is_none());
        assert!(session.expire_warning(&later));
        assert!(session.warning().is_none());
    }

    #[test]
    fn resolution_generates_three_proposals() {
        let session = in_resolution();
        let round = session.round().unwrap();
        assert_eq!(round.phase, RoundPhase::Resolution);
        assert_eq!(round.proposals.len(), 3);
        assert_eq!(
            round.proposals[1].action_items[0],
            "Honor shared values: respect"
        );
    }

    #[test]
    fn resolution_accepts_no_dialogue() {
        let mut session = in_resolution();
        let result = session.submit_round_response(
            RoundPhase::Resolution,
            pid(1),
            "option 1",
            &classifier(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn resolution_requires_selection() {
        let mut session = in_resolution();
        assert_not_permitted(session.complete_phase());
        assert!(session.draft().is_none());
    }

    #[test]
    fn proposal_selected_at_most_once() {
        let mut session = in_resolution();
        assert_eq!(
            session.select_proposal(ProposalId::new(9)).unwrap_err(),
            MediationError::UnknownProposal(ProposalId::new(9))
        );
        session.select_proposal(ProposalId::new(1)).unwrap();
        assert_eq!(
            session.select_proposal(ProposalId::new(2)).unwrap_err(),
            MediationError::ProposalAlreadySelected
        );
    }

    #[test]
    fn completing_resolution_drafts_pact() {
        let session = in_draft_review();
        assert_eq!(session.phase(), SessionPhase::DraftReview);
        assert_eq!(
            session.selected_proposal().unwrap().title,
            "Mutual Respect Agreement"
        );
        let draft = session.draft().unwrap();
        assert_eq!(draft.participants, "Alex and Jordan");
        assert!(draft.content.contains("Mutual Respect Agreement"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pause
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn pause_and_resume_return_to_same_round() {
        let mut session = in_round();
        respond_all(&mut session, RoundPhase::Acknowledgment);
        session.complete_phase().unwrap();

        session.pause(None).unwrap();
        assert_eq!(session.phase(), SessionPhase::Paused(RoundPhase::Clarification));
        assert!(session.escalation().detected);
        assert_eq!(
            session.escalation().reason.as_deref(),
            Some(crate::domain::mediation::DEFAULT_PAUSE_REASON)
        );
        assert_not_permitted(session.complete_phase());

        session.resume().unwrap();
        assert_eq!(session.phase(), SessionPhase::Round(RoundPhase::Clarification));
        assert_eq!(*session.escalation(), EscalationStatus::clear());
    }

    #[test]
    fn pause_keeps_custom_reason() {
        let mut session = in_round();
        session.pause(Some("Need a break")).unwrap();
        assert_eq!(session.escalation().reason.as_deref(), Some("Need a break"));
    }

    #[test]
    fn pause_outside_rounds_is_rejected() {
        let mut session = in_alignment();
        assert_not_permitted(session.pause(None));
        assert_not_permitted(session.resume());
    }

    #[test]
    fn end_from_pause_starts_fresh_session() {
        let mut session = in_round();
        let old_id = *session.id();
        assert_not_permitted(session.end());

        session.pause(None).unwrap();
        session.end().unwrap();
        assert_eq!(session.phase(), SessionPhase::ConsentPending);
        assert_ne!(*session.id(), old_id);
        assert!(session.participants().is_empty());
        assert!(session.round().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Draft, completion, feedback
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn draft_edit_and_approval_complete_session() {
        let mut session = in_draft_review();
        session.edit_draft("We agree to talk weekly.").unwrap();
        assert!(session.draft().unwrap().edited);

        session.approve_draft().unwrap();
        assert_eq!(session.phase(), SessionPhase::Complete);
        assert!(session.is_complete());
        assert_not_permitted(session.edit_draft("late change"));
    }

    #[test]
    fn feedback_only_once_and_only_when_complete() {
        let mut session = in_draft_review();
        assert_not_permitted(session.submit_feedback(5, "", "", None));

        session.approve_draft().unwrap();
        let err = session.submit_feedback(0, "", "", None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::OutOfRange);

        session
            .submit_feedback(4, " Listening phase ", "", Some(true))
            .unwrap();
        assert_eq!(session.feedback().unwrap().helpful, "Listening phase");
        assert_eq!(
            session.submit_feedback(5, "", "", None).unwrap_err(),
            MediationError::FeedbackAlreadySubmitted
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reset
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn reset_from_any_phase_clears_everything() {
        let builders: Vec<fn() -> MediationSession> = vec![
            MediationSession::default,
            in_intake,
            in_alignment,
            in_round,
            in_resolution,
            in_draft_review,
        ];
        for build in builders {
            let mut session = build();
            let old_id = *session.id();
            session.reset();
            assert_eq!(session.phase(), SessionPhase::ConsentPending);
            assert_ne!(*session.id(), old_id);
            assert!(session.participants().is_empty());
            assert!(session.signals().is_empty());
            assert!(session.snapshot().is_none());
            assert!(session.draft().is_none());
        }
    }

    #[test]
    fn reset_keeps_settings() {
        let settings = SessionSettings {
            escalation_display_secs: 9,
            default_pause_reason: "Breather".to_string(),
        };
        let mut session = MediationSession::new(settings.clone());
        session.reset();
        assert_eq!(*session.settings(), settings);
    }

    #[test]
    fn oversized_display_window_does_not_panic() {
        let settings = SessionSettings {
            escalation_display_secs: 10_000_000_000_000_000,
            ..Default::default()
        };
        let mut session = MediationSession::new(settings);
        assert!(!session.expire_warning(&Timestamp::now()));
    }
}
