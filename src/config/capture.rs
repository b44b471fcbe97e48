//! Voice capture configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Voice capture configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureConfig {
    /// Seconds before an unfinished capture is abandoned
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CaptureConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate capture configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidCaptureTimeout);
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
