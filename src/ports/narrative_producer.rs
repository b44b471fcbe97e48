//! NarrativeProducer port - Interface for speech-to-text sources.
//!
//! A producer yields recognized speech for one participant as a stream of
//! interim and final segments. The engine never depends on how recognition
//! happens.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::capture::{CaptureError, CaptureSegment};
use crate::domain::mediation::Participant;

/// Stream of segments for one capture. An `Err` item ends the capture.
pub type SegmentStream = BoxStream<'static, Result<CaptureSegment, CaptureError>>;

/// Port for a speech-to-text source.
///
/// Implementations must ensure:
/// - The stream ends when the speaker finishes
/// - Failures surface as a `CaptureError` item, never a panic
#[async_trait]
pub trait NarrativeProducer: Send + Sync {
    /// Whether capture is available at all in this environment.
    fn is_supported(&self) -> bool;

    /// Begin capturing speech for `participant`.
    ///
    /// # Errors
    ///
    /// Returns a `CaptureError` if capture cannot start (no microphone,
    /// permission denied, unsupported).
    async fn start(&self, participant: &Participant) -> Result<SegmentStream, CaptureError>;
}
