//! SessionPublisher port - Interface for pushing session views outward.
//!
//! The dispatcher publishes a fresh `SessionView` after every command,
//! accepted or rejected, so the UI always renders the current state.

use crate::domain::mediation::SessionView;

/// Port for delivering session views to the presentation layer.
///
/// Publishing is fire-and-forget: a publisher that cannot deliver logs the
/// failure itself and never affects the session.
pub trait SessionPublisher: Send + Sync {
    fn publish(&self, view: &SessionView);
}
