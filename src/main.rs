//! Peace Pact line-oriented driver.
//!
//! Reads one JSON request per stdin line and writes one JSON line on stdout.
//! Logs go to stderr.
//!
//! A request is either a `SessionCommand`, answered with the resulting
//! `SessionView`, or a `capture_narrative` request that replays recognized
//! speech segments through voice capture:
//!
//! ```json
//! {"type": "capture_narrative", "participant_id": 1,
//!  "segments": [{"kind": "final", "text": "I felt unheard."}]}
//! ```
//!
//! Rejections are answered with `{"error": {"code": ..., "message": ...}}`.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use peace_pact::adapters::{KeywordClassifier, ScriptedNarrativeProducer, TracingSessionPublisher};
use peace_pact::application::{
    CaptureNarrativeHandler, CaptureOutcome, MediationService, SessionCommand,
};
use peace_pact::config::{AppConfig, LoggingConfig};
use peace_pact::domain::capture::CaptureSegment;
use peace_pact::domain::foundation::{ErrorCode, ParticipantId};
use peace_pact::domain::mediation::{MediationError, SessionView};
use peace_pact::ports::SessionPublisher;

const CAPTURE_NARRATIVE: &str = "capture_narrative";

#[derive(Debug, Deserialize)]
struct CaptureRequest {
    participant_id: ParticipantId,
    #[serde(default)]
    segments: Vec<CaptureSegment>,
}

#[derive(Debug, Serialize)]
struct CaptureReply {
    capture: CaptureOutcome,
    view: Option<SessionView>,
}

/// One mediation session driven line by line.
struct Console {
    service: MediationService,
    capture_timeout: Duration,
}

impl Console {
    fn from_config(config: &AppConfig, publisher: Arc<dyn SessionPublisher>) -> Self {
        let classifier = Arc::new(KeywordClassifier::with_options(config.analysis.options()));
        Self {
            service: MediationService::new(config.session.settings(), classifier, publisher),
            capture_timeout: config.capture.timeout(),
        }
    }

    async fn handle_line(&mut self, line: &str) -> Result<Value, serde_json::Error> {
        let request: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => return Ok(parse_error(&err)),
        };

        if request.get("type").and_then(Value::as_str) == Some(CAPTURE_NARRATIVE) {
            return match serde_json::from_value::<CaptureRequest>(request) {
                Ok(capture) => self.capture(capture).await,
                Err(err) => Ok(parse_error(&err)),
            };
        }

        match serde_json::from_value::<SessionCommand>(request) {
            Ok(command) => match self.service.dispatch(command) {
                Ok(view) => serde_json::to_value(&view),
                Err(err) => Ok(rejection(&err)),
            },
            Err(err) => Ok(parse_error(&err)),
        }
    }

    async fn capture(&mut self, request: CaptureRequest) -> Result<Value, serde_json::Error> {
        let producer = ScriptedNarrativeProducer::from_segments(request.segments);
        let handler = CaptureNarrativeHandler::new(Arc::new(producer), self.capture_timeout);

        match handler
            .capture_and_submit(&mut self.service, request.participant_id)
            .await
        {
            Ok((capture, view)) => serde_json::to_value(&CaptureReply { capture, view }),
            Err(err) => Ok(rejection(&err)),
        }
    }
}

fn rejection(err: &MediationError) -> Value {
    json!({
        "error": { "code": err.code().to_string(), "message": err.to_string() }
    })
}

fn parse_error(err: &serde_json::Error) -> Value {
    warn!(error = %err, "Unparseable request");
    json!({
        "error": {
            "code": ErrorCode::InvalidFormat.to_string(),
            "message": err.to_string(),
        }
    })
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!logging.json)
                .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let mut console = Console::from_config(&config, Arc::new(TracingSessionPublisher::new()));
    info!(
        session_id = %console.service.view().session_id,
        capture_timeout_secs = config.capture.timeout_secs,
        "Peace Pact ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let output = console.handle_line(line).await?;
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use peace_pact::adapters::InMemorySessionPublisher;
    use peace_pact::config::CaptureConfig;

    fn console() -> Console {
        Console::from_config(&AppConfig::default(), Arc::new(InMemorySessionPublisher::new()))
    }

    async fn registered() -> Console {
        let mut console = console();
        for line in [
            r#"{"type": "give_consent", "flags": {"emotional_safety": true, "voice_transcription": true, "ai_arbitration": true, "privacy_policy": true}}"#,
            r#"{"type": "register_participants", "participants": [{"alias": "Alex"}, {"alias": "Jordan"}]}"#,
        ] {
            let reply = console.handle_line(line).await.unwrap();
            assert!(reply.get("error").is_none(), "{}", reply);
        }
        console
    }

    #[test]
    fn capture_timeout_comes_from_config() {
        let config = AppConfig {
            capture: CaptureConfig { timeout_secs: 7 },
            ..Default::default()
        };
        let console = Console::from_config(&config, Arc::new(InMemorySessionPublisher::new()));
        assert_eq!(console.capture_timeout, Duration::from_secs(7));
    }

    #[tokio::test]
    async fn command_line_returns_view() {
        let mut console = registered().await;
        let reply = console
            .handle_line(r#"{"type": "skip_narrative", "participant_id": 1}"#)
            .await
            .unwrap();
        assert_eq!(reply["current_participant"], 2);
    }

    #[tokio::test]
    async fn capture_line_submits_final_text() {
        let mut console = registered().await;
        let reply = console
            .handle_line(
                r#"{"type": "capture_narrative", "participant_id": 1, "segments": [{"kind": "interim", "text": "I need"}, {"kind": "final", "text": "I need respect."}]}"#,
            )
            .await
            .unwrap();

        assert_eq!(reply["capture"]["outcome"], "captured");
        assert_eq!(reply["view"]["narratives"][0]["text"], "I need respect.");
    }

    #[tokio::test]
    async fn empty_capture_falls_back_to_manual() {
        let mut console = registered().await;
        let reply = console
            .handle_line(r#"{"type": "capture_narrative", "participant_id": 1}"#)
            .await
            .unwrap();

        assert_eq!(reply["capture"]["outcome"], "fallback_to_manual");
        assert_eq!(reply["capture"]["reason"], "no_speech_detected");
        assert!(reply["view"].is_null());
    }

    #[tokio::test]
    async fn rejected_and_malformed_lines_report_codes() {
        let mut console = console();
        let reply = console
            .handle_line(r#"{"type": "approve_snapshot"}"#)
            .await
            .unwrap();
        assert_eq!(reply["error"]["code"], "INVALID_STATE_TRANSITION");

        let reply = console.handle_line("not json").await.unwrap();
        assert_eq!(reply["error"]["code"], "INVALID_FORMAT");
    }
}
