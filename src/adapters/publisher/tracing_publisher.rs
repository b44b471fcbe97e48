//! Session publisher that writes views to the tracing log.

use tracing::{debug, info, warn};

use crate::domain::mediation::SessionView;
use crate::ports::SessionPublisher;

/// Logs a one-line summary of each view at `info` and the full JSON at
/// `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSessionPublisher;

impl TracingSessionPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl SessionPublisher for TracingSessionPublisher {
    fn publish(&self, view: &SessionView) {
        info!(
            session_id = %view.session_id,
            phase = %view.phase,
            participants = view.participants.len(),
            paused = view.escalation.detected,
            warning = view.escalation_warning.is_some(),
            "Session view published"
        );

        match serde_json::to_string(view) {
            Ok(json) => debug!(session_id = %view.session_id, view = %json, "Session view"),
            Err(e) => warn!(
                session_id = %view.session_id,
                error = %e,
                "Failed to serialize session view"
            ),
        }
    }
}
