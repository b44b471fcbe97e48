//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the mediation domain.

mod errors;
mod ids;
mod rating;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{ParticipantId, ProposalId, SessionId};
pub use rating::Rating;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
