//! Consent gathered before a session may begin.

use serde::{Deserialize, Serialize};

/// The four acknowledgements every session requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentFlags {
    pub emotional_safety: bool,
    pub voice_transcription: bool,
    pub ai_arbitration: bool,
    pub privacy_policy: bool,
}

impl ConsentFlags {
    /// All four flags set.
    pub fn granted() -> Self {
        Self {
            emotional_safety: true,
            voice_transcription: true,
            ai_arbitration: true,
            privacy_policy: true,
        }
    }

    pub fn all_given(&self) -> bool {
        self.missing().is_empty()
    }

    /// Names of the flags still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("emotional_safety", self.emotional_safety),
            ("voice_transcription", self.voice_transcription),
            ("ai_arbitration", self.ai_arbitration),
            ("privacy_policy", self.privacy_policy),
        ]
        .into_iter()
        .filter(|(_, given)| !given)
        .map(|(name, _)| name)
        .collect()
    }
}
