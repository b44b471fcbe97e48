//! Per-session tunables supplied by configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAUSE_REASON: &str =
    "Heightened emotions detected - session paused for cooling down";

pub const DEFAULT_ESCALATION_DISPLAY_SECS: u64 = 5;

/// Longest escalation display window, one hour.
pub const MAX_ESCALATION_DISPLAY_SECS: u64 = 3_600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// How long an escalation warning stays visible.
    pub escalation_display_secs: u64,
    /// Reason recorded when a pause is requested without one.
    pub default_pause_reason: String,
}

impl SessionSettings {
    /// Display window, capped at [`MAX_ESCALATION_DISPLAY_SECS`].
    pub fn escalation_window(&self) -> Duration {
        let secs = self.escalation_display_secs.min(MAX_ESCALATION_DISPLAY_SECS);
        Duration::seconds(secs as i64)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            escalation_display_secs: DEFAULT_ESCALATION_DISPLAY_SECS,
            default_pause_reason: DEFAULT_PAUSE_REASON.to_string(),
        }
    }
}
