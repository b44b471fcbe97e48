//! MediationService - the single dispatch point for session commands.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::Timestamp;
use crate::domain::mediation::{MediationError, MediationSession, SessionSettings, SessionView};
use crate::ports::{NarrativeClassifier, SessionPublisher};

use crate::application::commands::SessionCommand;

/// Owns the session aggregate and applies commands to it one at a time.
///
/// `dispatch` takes `&mut self`, so commands are serialized by ownership.
/// Every dispatch, accepted or rejected, publishes the resulting view.
pub struct MediationService {
    session: MediationSession,
    classifier: Arc<dyn NarrativeClassifier>,
    publisher: Arc<dyn SessionPublisher>,
}

impl MediationService {
    pub fn new(
        settings: SessionSettings,
        classifier: Arc<dyn NarrativeClassifier>,
        publisher: Arc<dyn SessionPublisher>,
    ) -> Self {
        Self {
            session: MediationSession::new(settings),
            classifier,
            publisher,
        }
    }

    pub fn session(&self) -> &MediationSession {
        &self.session
    }

    /// Current view without applying a command.
    pub fn view(&self) -> SessionView {
        self.session.view(&Timestamp::now())
    }

    /// Applies one command and publishes the resulting view.
    ///
    /// # Errors
    ///
    /// Returns the session's `MediationError` when the command is rejected;
    /// the session is unchanged in that case.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<SessionView, MediationError> {
        let name = command.name();
        let result = self.apply(command);

        let now = Timestamp::now();
        self.session.expire_warning(&now);
        let view = self.session.view(&now);
        self.publisher.publish(&view);

        match result {
            Ok(()) => {
                debug!(command = name, phase = %view.phase, "Command applied");
                Ok(view)
            }
            Err(err) => {
                debug!(command = name, code = %err.code(), error = %err, "Command rejected");
                Err(err)
            }
        }
    }

    /// Drops an escalation warning whose display window has passed and
    /// republishes if anything changed.
    pub fn tick(&mut self, now: &Timestamp) -> bool {
        let expired = self.session.expire_warning(now);
        if expired {
            self.publisher.publish(&self.session.view(now));
        }
        expired
    }

    fn apply(&mut self, command: SessionCommand) -> Result<(), MediationError> {
        let classifier = self.classifier.as_ref();
        let session = &mut self.session;
        match command {
            SessionCommand::GiveConsent { flags } => session.give_consent(flags),
            SessionCommand::RegisterParticipants { participants } => {
                session.register_participants(&participants)
            }
            SessionCommand::SubmitNarrative {
                participant_id,
                text,
            } => session.submit_narrative(participant_id, &text, classifier),
            SessionCommand::SkipNarrative { participant_id } => {
                session.skip_narrative(participant_id, classifier)
            }
            SessionCommand::ApproveSnapshot => session.approve_snapshot(),
            SessionCommand::EditParticipantSignals {
                participant_id,
                patch,
            } => session.edit_participant_signals(participant_id, patch),
            SessionCommand::SubmitRoundResponse {
                phase,
                participant_id,
                text,
            } => session
                .submit_round_response(phase, participant_id, &text, classifier)
                .map(|_| ()),
            SessionCommand::CompletePhase => session.complete_phase(),
            SessionCommand::SelectProposal { proposal_id } => session.select_proposal(proposal_id),
            SessionCommand::PauseSession { reason } => session.pause(reason.as_deref()),
            SessionCommand::ResumeSession => session.resume(),
            SessionCommand::EndSession => session.end(),
            SessionCommand::EditDraft { text } => session.edit_draft(&text),
            SessionCommand::ApproveDraft => session.approve_draft(),
            SessionCommand::SubmitFeedback {
                rating,
                helpful,
                suggestions,
                would_recommend,
            } => session.submit_feedback(rating, &helpful, &suggestions, would_recommend),
            SessionCommand::ResetSession => {
                session.reset();
                Ok(())
            }
        }
    }
}
