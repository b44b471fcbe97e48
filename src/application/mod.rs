//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod commands;
pub mod handlers;

pub use commands::SessionCommand;
pub use handlers::{CaptureNarrativeHandler, CaptureOutcome, MediationService};
