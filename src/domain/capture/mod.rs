//! Narrative capture domain.
//!
//! Speech recognition itself happens outside the engine; this module holds
//! the failure vocabulary and the transcript assembled from the segments a
//! producer yields.

mod errors;
mod transcript;

pub use errors::CaptureError;
pub use transcript::{CaptureSegment, TranscriptBuffer};
