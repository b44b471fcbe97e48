//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Keyword-based narrative classifier
//! - `capture` - Narrative producers (scripted)
//! - `publisher` - Session view publishers (in-memory, tracing)

pub mod capture;
pub mod classifier;
pub mod publisher;

pub use capture::ScriptedNarrativeProducer;
pub use classifier::KeywordClassifier;
pub use publisher::{InMemorySessionPublisher, TracingSessionPublisher};
