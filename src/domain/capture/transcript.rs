//! Accumulation of recognized speech segments.

use serde::{Deserialize, Serialize};

/// One piece of recognized speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum CaptureSegment {
    /// Provisional text that a later segment will replace.
    Interim(String),
    /// Confirmed text.
    Final(String),
}

/// Running transcript for one capture.
///
/// Final segments are appended, each followed by a space. Only the latest
/// interim segment is kept and it is dropped once a final segment arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptBuffer {
    confirmed: String,
    interim: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: CaptureSegment) {
        match segment {
            CaptureSegment::Interim(text) => self.interim = text,
            CaptureSegment::Final(text) => {
                self.interim.clear();
                if !text.is_empty() {
                    self.confirmed.push_str(&text);
                    self.confirmed.push(' ');
                }
            }
        }
    }

    /// Confirmed text, trimmed, ready to submit as a narrative.
    pub fn text(&self) -> &str {
        self.confirmed.trim()
    }

    /// Confirmed text followed by the pending interim segment.
    pub fn preview(&self) -> String {
        format!("{}{}", self.confirmed, self.interim).trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    pub fn clear(&mut self) {
        self.confirmed.clear();
        self.interim.clear();
    }
}
