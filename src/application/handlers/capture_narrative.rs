//! CaptureNarrativeHandler - voice capture with typed-entry fallback.
//!
//! Drives a `NarrativeProducer` under a timeout and turns whatever it
//! yields into either a finished narrative or a request for manual entry.
//! Capture failures never reach the session as errors.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::domain::capture::{CaptureError, TranscriptBuffer};
use crate::domain::foundation::ParticipantId;
use crate::domain::mediation::{MediationError, Participant, SessionView};
use crate::ports::NarrativeProducer;

use super::mediation_service::MediationService;
use crate::application::commands::SessionCommand;

/// Result of one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CaptureOutcome {
    /// Confirmed transcript, ready to submit.
    Captured { text: String },
    /// Capture failed; the UI should offer typed entry, prefilled with
    /// whatever was confirmed before the failure.
    FallbackToManual {
        reason: CaptureError,
        message: String,
        partial: String,
    },
}

impl CaptureOutcome {
    fn fallback(reason: CaptureError, partial: &TranscriptBuffer) -> Self {
        CaptureOutcome::FallbackToManual {
            reason,
            message: reason.user_message().to_string(),
            partial: partial.text().to_string(),
        }
    }
}

/// Handler for capturing a narrative by voice.
pub struct CaptureNarrativeHandler {
    producer: Arc<dyn NarrativeProducer>,
    timeout: Duration,
}

impl CaptureNarrativeHandler {
    pub fn new(producer: Arc<dyn NarrativeProducer>, timeout: Duration) -> Self {
        Self { producer, timeout }
    }

    /// Runs one capture for `participant`.
    ///
    /// An empty transcript counts as `NoSpeechDetected`. Exceeding the
    /// timeout yields `Timeout`.
    pub async fn capture(&self, participant: &Participant) -> CaptureOutcome {
        let mut buffer = TranscriptBuffer::new();

        if !self.producer.is_supported() {
            return self.fail(participant, CaptureError::NotSupported, &buffer);
        }

        let producer = Arc::clone(&self.producer);
        let run = async {
            let mut segments = producer.start(participant).await?;
            while let Some(segment) = segments.next().await {
                buffer.push(segment?);
            }
            Ok::<(), CaptureError>(())
        };

        let result = timeout(self.timeout, run).await;
        match result {
            Err(_elapsed) => self.fail(participant, CaptureError::Timeout, &buffer),
            Ok(Err(error)) => self.fail(participant, error, &buffer),
            Ok(Ok(())) if buffer.is_empty() => {
                self.fail(participant, CaptureError::NoSpeechDetected, &buffer)
            }
            Ok(Ok(())) => {
                info!(
                    participant = %participant.id,
                    chars = buffer.text().len(),
                    "Narrative captured"
                );
                CaptureOutcome::Captured {
                    text: buffer.text().to_string(),
                }
            }
        }
    }

    /// Captures a narrative and submits it to the session on success.
    ///
    /// Returns the outcome and, when a narrative was submitted, the
    /// resulting view.
    ///
    /// # Errors
    ///
    /// - `UnknownParticipant` if the id is not registered
    /// - any rejection from `submit_narrative`
    pub async fn capture_and_submit(
        &self,
        service: &mut MediationService,
        participant_id: ParticipantId,
    ) -> Result<(CaptureOutcome, Option<SessionView>), MediationError> {
        let participant = service
            .session()
            .participants()
            .get(participant_id.index())
            .filter(|p| p.id == participant_id)
            .cloned()
            .ok_or(MediationError::UnknownParticipant(participant_id))?;

        let outcome = self.capture(&participant).await;
        let view = match &outcome {
            CaptureOutcome::Captured { text } => Some(service.dispatch(
                SessionCommand::SubmitNarrative {
                    participant_id,
                    text: text.clone(),
                },
            )?),
            CaptureOutcome::FallbackToManual { .. } => None,
        };
        Ok((outcome, view))
    }

    fn fail(
        &self,
        participant: &Participant,
        reason: CaptureError,
        buffer: &TranscriptBuffer,
    ) -> CaptureOutcome {
        warn!(
            participant = %participant.id,
            reason = reason.as_str(),
            partial_chars = buffer.text().len(),
            "Narrative capture failed, falling back to manual entry"
        );
        CaptureOutcome::fallback(reason, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemorySessionPublisher, KeywordClassifier, ScriptedNarrativeProducer};
    use crate::domain::mediation::{
        ConsentFlags, ParticipantRegistration, SessionPhase, SessionSettings,
    };

    fn participant() -> Participant {
        Participant {
            id: ParticipantId::new(1).unwrap(),
            display_name: "Alex".to_string(),
        }
    }

    fn handler(producer: ScriptedNarrativeProducer) -> CaptureNarrativeHandler {
        CaptureNarrativeHandler::new(Arc::new(producer), Duration::from_millis(200))
    }

    #[tokio::test]
    async fn final_segments_become_narrative() {
        let producer = ScriptedNarrativeProducer::new()
            .with_interim("I feel")
            .with_final("I feel unheard.")
            .with_final("I need respect.");
        let outcome = handler(producer).capture(&participant()).await;
        assert_eq!(
            outcome,
            CaptureOutcome::Captured {
                text: "I feel unheard. I need respect.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unsupported_producer_falls_back() {
        let outcome = handler(ScriptedNarrativeProducer::unsupported())
            .capture(&participant())
            .await;
        assert!(matches!(
            outcome,
            CaptureOutcome::FallbackToManual {
                reason: CaptureError::NotSupported,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn mid_stream_error_keeps_partial_text() {
        let producer = ScriptedNarrativeProducer::new()
            .with_final("I felt")
            .with_error(CaptureError::from_recognizer_code("network"));
        let outcome = handler(producer).capture(&participant()).await;
        assert_eq!(
            outcome,
            CaptureOutcome::FallbackToManual {
                reason: CaptureError::NetworkError,
                message: CaptureError::NetworkError.user_message().to_string(),
                partial: "I felt".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn silence_is_no_speech() {
        let producer = ScriptedNarrativeProducer::new().with_interim("uh");
        let outcome = handler(producer).capture(&participant()).await;
        assert!(matches!(
            outcome,
            CaptureOutcome::FallbackToManual {
                reason: CaptureError::NoSpeechDetected,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn hanging_producer_times_out() {
        let producer = ScriptedNarrativeProducer::new()
            .with_final("I started")
            .hanging();
        let outcome = handler(producer).capture(&participant()).await;
        assert_eq!(
            outcome,
            CaptureOutcome::FallbackToManual {
                reason: CaptureError::Timeout,
                message: CaptureError::Timeout.user_message().to_string(),
                partial: "I started".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn captured_text_is_submitted_to_session() {
        let mut service = MediationService::new(
            SessionSettings::default(),
            Arc::new(KeywordClassifier::default()),
            Arc::new(InMemorySessionPublisher::new()),
        );
        service
            .dispatch(SessionCommand::GiveConsent {
                flags: ConsentFlags::granted(),
            })
            .unwrap();
        service
            .dispatch(SessionCommand::RegisterParticipants {
                participants: vec![
                    ParticipantRegistration::alias("Alex"),
                    ParticipantRegistration::alias("Jordan"),
                ],
            })
            .unwrap();

        let handler = handler(ScriptedNarrativeProducer::new().with_final("I need a fair chance."));
        let (outcome, view) = handler
            .capture_and_submit(&mut service, ParticipantId::new(1).unwrap())
            .await
            .unwrap();

        assert!(matches!(outcome, CaptureOutcome::Captured { .. }));
        let view = view.unwrap();
        assert_eq!(view.phase, SessionPhase::Intake);
        assert_eq!(view.narratives[0].text, "I need a fair chance.");
        assert_eq!(view.current_participant, ParticipantId::new(2).ok());
    }

    #[tokio::test]
    async fn unknown_participant_is_rejected_before_capture() {
        let mut service = MediationService::new(
            SessionSettings::default(),
            Arc::new(KeywordClassifier::default()),
            Arc::new(InMemorySessionPublisher::new()),
        );
        let producer = ScriptedNarrativeProducer::new().with_final("hello");
        let handler = handler(producer.clone());
        let err = handler
            .capture_and_submit(&mut service, ParticipantId::new(1).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, MediationError::UnknownParticipant(ParticipantId::new(1).unwrap()));
        assert_eq!(producer.start_count(), 0);
    }
}
