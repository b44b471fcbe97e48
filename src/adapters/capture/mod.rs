//! Narrative producer adapters.

mod scripted;

pub use scripted::ScriptedNarrativeProducer;
