//! Scripted narrative producer for tests and the CLI.
//!
//! Replays a fixed sequence of segments instead of listening to a
//! microphone.
//!
//! # Features
//!
//! - Pre-configured interim and final segments
//! - Simulated per-segment latency
//! - Error injection at start or mid-stream
//! - A never-ending mode for timeout testing
//!
//! # Example
//!
//! ```ignore
//! let producer = ScriptedNarrativeProducer::new()
//!     .with_interim("I felt")
//!     .with_final("I felt ignored");
//! ```

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::capture::{CaptureError, CaptureSegment};
use crate::domain::mediation::Participant;
use crate::ports::{NarrativeProducer, SegmentStream};

#[derive(Debug, Clone)]
pub struct ScriptedNarrativeProducer {
    supported: bool,
    start_error: Option<CaptureError>,
    script: Vec<Result<CaptureSegment, CaptureError>>,
    delay: Duration,
    hang: bool,
    starts: Arc<AtomicUsize>,
}

impl Default for ScriptedNarrativeProducer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedNarrativeProducer {
    pub fn new() -> Self {
        Self {
            supported: true,
            start_error: None,
            script: Vec::new(),
            delay: Duration::ZERO,
            hang: false,
            starts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Replays an already-recognized transcript.
    pub fn from_segments(segments: impl IntoIterator<Item = CaptureSegment>) -> Self {
        Self {
            script: segments.into_iter().map(Ok).collect(),
            ..Self::new()
        }
    }

    /// Producer for an environment without speech recognition.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new()
        }
    }

    pub fn with_interim(mut self, text: impl Into<String>) -> Self {
        self.script.push(Ok(CaptureSegment::Interim(text.into())));
        self
    }

    pub fn with_final(mut self, text: impl Into<String>) -> Self {
        self.script.push(Ok(CaptureSegment::Final(text.into())));
        self
    }

    /// Fails mid-stream after the segments queued so far.
    pub fn with_error(mut self, error: CaptureError) -> Self {
        self.script.push(Err(error));
        self
    }

    /// Fails before yielding anything.
    pub fn failing_start(mut self, error: CaptureError) -> Self {
        self.start_error = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Keeps the stream open after the script runs out.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    /// Number of times capture was started.
    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NarrativeProducer for ScriptedNarrativeProducer {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn start(&self, _participant: &Participant) -> Result<SegmentStream, CaptureError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        if !self.supported {
            return Err(CaptureError::NotSupported);
        }
        if let Some(error) = self.start_error {
            return Err(error);
        }

        let delay = self.delay;
        let scripted = stream::iter(self.script.clone()).then(move |item| async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            item
        });

        if self.hang {
            Ok(scripted.chain(stream::pending::<Result<CaptureSegment, CaptureError>>()).boxed())
        } else {
            Ok(scripted.boxed())
        }
    }
}
