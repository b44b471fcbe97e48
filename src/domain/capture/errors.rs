//! Capture failure vocabulary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Reasons a narrative producer can fail. Every variant is recoverable by
/// falling back to typed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureError {
    #[error("voice capture is not supported")]
    NotSupported,

    #[error("microphone permission denied")]
    MicrophonePermissionDenied,

    #[error("no speech detected")]
    NoSpeechDetected,

    #[error("no microphone found")]
    NoMicrophoneFound,

    #[error("network error during recognition")]
    NetworkError,

    #[error("capture timed out")]
    Timeout,

    #[error("recognition aborted")]
    RecognitionAborted,

    #[error("recognition error")]
    RecognitionError,
}

impl CaptureError {
    /// Maps a raw recognizer error code onto the vocabulary. Unknown codes
    /// become `RecognitionError`.
    pub fn from_recognizer_code(code: &str) -> Self {
        match code {
            "not-allowed" => CaptureError::MicrophonePermissionDenied,
            "no-speech" => CaptureError::NoSpeechDetected,
            "audio-capture" => CaptureError::NoMicrophoneFound,
            "network" => CaptureError::NetworkError,
            "aborted" => CaptureError::RecognitionAborted,
            _ => CaptureError::RecognitionError,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureError::NotSupported => "not_supported",
            CaptureError::MicrophonePermissionDenied => "microphone_permission_denied",
            CaptureError::NoSpeechDetected => "no_speech_detected",
            CaptureError::NoMicrophoneFound => "no_microphone_found",
            CaptureError::NetworkError => "network_error",
            CaptureError::Timeout => "timeout",
            CaptureError::RecognitionAborted => "recognition_aborted",
            CaptureError::RecognitionError => "recognition_error",
        }
    }

    /// Message shown to the participant alongside the typed-entry fallback.
    pub fn user_message(&self) -> &'static str {
        match self {
            CaptureError::NotSupported => {
                "Voice recording is not available. Please use the text input below."
            }
            CaptureError::MicrophonePermissionDenied => {
                "Microphone access was denied. Please enable microphone permissions, or use the text input below."
            }
            CaptureError::NoSpeechDetected => {
                "No speech was detected. Please try speaking again or use the text input below."
            }
            CaptureError::NoMicrophoneFound => {
                "No microphone was found. Please check your microphone connection or use the text input below."
            }
            CaptureError::NetworkError => {
                "Network error occurred. Please check your connection and try again."
            }
            CaptureError::Timeout => {
                "Recording timed out. Please try again or use the text input below."
            }
            CaptureError::RecognitionAborted => "Recording was interrupted. Please try again.",
            CaptureError::RecognitionError => {
                "Voice recording encountered an issue. Please try again or use the text input below."
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::CaptureFailed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizer_codes_map_onto_vocabulary() {
        let cases = [
            ("not-allowed", CaptureError::MicrophonePermissionDenied),
            ("no-speech", CaptureError::NoSpeechDetected),
            ("audio-capture", CaptureError::NoMicrophoneFound),
            ("network", CaptureError::NetworkError),
            ("aborted", CaptureError::RecognitionAborted),
            ("service-not-allowed", CaptureError::RecognitionError),
            ("", CaptureError::RecognitionError),
        ];
        for (code, expected) in cases {
            assert_eq!(CaptureError::from_recognizer_code(code), expected, "{}", code);
        }
    }

    #[test]
    fn serde_name_matches_as_str() {
        for err in [
            CaptureError::NotSupported,
            CaptureError::MicrophonePermissionDenied,
            CaptureError::Timeout,
            CaptureError::RecognitionError,
        ] {
            let json = serde_json::to_string(&err).unwrap();
            assert_eq!(json, format!("\"{}\"", err.as_str()));
        }
    }

    #[test]
    fn every_error_has_capture_code() {
        assert_eq!(CaptureError::NetworkError.code(), ErrorCode::CaptureFailed);
        assert!(CaptureError::Timeout.user_message().contains("timed out"));
    }
}
