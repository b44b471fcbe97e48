//! Session configuration

use serde::Deserialize;

use crate::domain::mediation::{
    SessionSettings, DEFAULT_ESCALATION_DISPLAY_SECS, DEFAULT_PAUSE_REASON,
    MAX_ESCALATION_DISPLAY_SECS,
};

use super::error::ValidationError;

/// Session tunables
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds an escalation warning stays visible
    #[serde(default = "default_escalation_display_secs")]
    pub escalation_display_secs: u64,

    /// Reason recorded when a pause carries none
    #[serde(default = "default_pause_reason")]
    pub default_pause_reason: String,
}

impl SessionConfig {
    /// Settings handed to each new session
    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            escalation_display_secs: self.escalation_display_secs,
            default_pause_reason: self.default_pause_reason.trim().to_string(),
        }
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.escalation_display_secs == 0 {
            return Err(ValidationError::InvalidEscalationWindow);
        }
        if self.escalation_display_secs > MAX_ESCALATION_DISPLAY_SECS {
            return Err(ValidationError::EscalationWindowTooLong {
                max: MAX_ESCALATION_DISPLAY_SECS,
            });
        }
        if self.default_pause_reason.trim().is_empty() {
            return Err(ValidationError::BlankPauseReason);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            escalation_display_secs: default_escalation_display_secs(),
            default_pause_reason: default_pause_reason(),
        }
    }
}

fn default_escalation_display_secs() -> u64 {
    DEFAULT_ESCALATION_DISPLAY_SECS
}

fn default_pause_reason() -> String {
    DEFAULT_PAUSE_REASON.to_string()
}
