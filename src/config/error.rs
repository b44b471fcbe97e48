//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Escalation display window must be at least one second")]
    InvalidEscalationWindow,

    #[error("Escalation display window must not exceed {max} seconds")]
    EscalationWindowTooLong { max: u64 },

    #[error("Default pause reason must not be blank")]
    BlankPauseReason,

    #[error("Capture timeout must be at least one second")]
    InvalidCaptureTimeout,

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}
