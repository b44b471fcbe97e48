//! Analysis configuration

use serde::Deserialize;

use crate::domain::analysis::AnalysisOptions;

/// Narrative analysis switches. Both default to off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub dedupe_needs: bool,

    #[serde(default)]
    pub clamp_intensity: bool,
}

impl AnalysisConfig {
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            dedupe_needs: self.dedupe_needs,
            clamp_intensity: self.clamp_intensity,
        }
    }
}
