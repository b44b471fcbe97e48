//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod capture_narrative;
mod mediation_service;

pub use capture_narrative::{CaptureNarrativeHandler, CaptureOutcome};
pub use mediation_service::MediationService;
