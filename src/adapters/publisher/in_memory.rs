//! In-memory session publisher for testing.
//!
//! Records every published view so tests can assert on what the UI would
//! have been shown.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. This adapter is meant for
//! tests and the CLI, not for long-running hosts.

use std::sync::RwLock;

use crate::domain::mediation::{SessionPhase, SessionView};
use crate::ports::SessionPublisher;

/// Recording publisher.
///
/// # Example
///
/// ```ignore
/// let publisher = Arc::new(InMemorySessionPublisher::new());
/// let mut service = MediationService::new(settings, classifier, publisher.clone());
/// service.dispatch(command)?;
/// assert_eq!(publisher.view_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySessionPublisher {
    views: RwLock<Vec<SessionView>>,
}

impl InMemorySessionPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns every published view, oldest first.
    pub fn published_views(&self) -> Vec<SessionView> {
        self.views
            .read()
            .expect("InMemorySessionPublisher: views lock poisoned")
            .clone()
    }

    /// Returns the most recently published view.
    pub fn last_view(&self) -> Option<SessionView> {
        self.views
            .read()
            .expect("InMemorySessionPublisher: views lock poisoned")
            .last()
            .cloned()
    }

    /// Returns count of published views.
    pub fn view_count(&self) -> usize {
        self.views
            .read()
            .expect("InMemorySessionPublisher: views lock poisoned")
            .len()
    }

    /// Sequence of phases across published views.
    pub fn phases(&self) -> Vec<SessionPhase> {
        self.views
            .read()
            .expect("InMemorySessionPublisher: views lock poisoned")
            .iter()
            .map(|v| v.phase)
            .collect()
    }

    /// Clears recorded views (for test isolation).
    pub fn clear(&self) {
        self.views
            .write()
            .expect("InMemorySessionPublisher: views write lock poisoned")
            .clear();
    }
}

impl SessionPublisher for InMemorySessionPublisher {
    fn publish(&self, view: &SessionView) {
        self.views
            .write()
            .expect("InMemorySessionPublisher: views write lock poisoned")
            .push(view.clone());
    }
}
