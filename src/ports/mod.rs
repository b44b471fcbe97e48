//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `NarrativeClassifier` - Turns narrative text into signals and checks
//!   dialogue for escalation
//! - `NarrativeProducer` - Speech-to-text source yielding capture segments
//! - `SessionPublisher` - Receives the session view after every command

mod narrative_classifier;
mod narrative_producer;
mod session_publisher;

pub use narrative_classifier::NarrativeClassifier;
pub use narrative_producer::{NarrativeProducer, SegmentStream};
pub use session_publisher::SessionPublisher;
