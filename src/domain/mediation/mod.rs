//! Mediation domain module.
//!
//! The `MediationSession` aggregate and the values it owns: consent,
//! participants, narratives, dialogue rounds, escalation state, the drafted
//! Peace Pact and post-session feedback.
//!
//! # Lifecycle
//!
//! consent -> identity setup -> intake -> alignment review -> acknowledgment
//! -> clarification -> resolution -> draft review -> complete, with a pause
//! available from any round and a reset available from anywhere.

mod aggregate;
mod consent;
mod draft;
mod errors;
mod escalation;
mod feedback;
mod narrative;
mod participant;
mod phase;
mod round;
mod settings;
mod view;

pub use aggregate::MediationSession;
pub use consent::ConsentFlags;
pub use draft::{PeacePact, PACT_TITLE};
pub use errors::MediationError;
pub use escalation::{EscalationStatus, EscalationWarning};
pub use feedback::SessionFeedback;
pub use narrative::Narrative;
pub use participant::{Participant, ParticipantRegistration, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use phase::{RoundPhase, SessionPhase};
pub use round::{MediationRound, RoundResponse};
pub use settings::{
    SessionSettings, DEFAULT_ESCALATION_DISPLAY_SECS, DEFAULT_PAUSE_REASON,
    MAX_ESCALATION_DISPLAY_SECS,
};
pub use view::{RoundGuide, SessionView};
