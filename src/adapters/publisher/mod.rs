//! Session publisher adapters.

mod in_memory;
mod tracing_publisher;

pub use in_memory::InMemorySessionPublisher;
pub use tracing_publisher::TracingSessionPublisher;
