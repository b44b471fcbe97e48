//! A participant's account of the conflict.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, Timestamp, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub participant_id: ParticipantId,
    pub text: String,
    pub captured_at: Timestamp,
}

impl Narrative {
    /// Creates a narrative, rejecting blank text. Skipping is a separate
    /// command.
    pub fn new(
        participant_id: ParticipantId,
        text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("narrative"));
        }
        Ok(Self {
            participant_id,
            text,
            captured_at: Timestamp::now(),
        })
    }
}
