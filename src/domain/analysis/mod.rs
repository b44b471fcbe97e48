//! Analysis Module - pure domain services for narrative analysis.
//!
//! # Components
//!
//! - `NarrativeAnalyzer` - pain points, values and needs from a narrative
//! - `EmotionClassifier` - dominant emotion and intensity
//! - `SnapshotSynthesizer` - cross-participant conflict snapshot
//! - `EscalationDetector` - risk language in dialogue
//! - `ProposalGenerator` - templated resolution proposals
//!
//! All functions are pure and stateless: the same text and lexicon always
//! produce the same result.

mod emotion;
mod escalation;
mod narrative_analyzer;
mod proposals;
mod signals;
mod snapshot;

pub use emotion::{EmotionClassifier, EmotionReading, EmotionScore};
pub use escalation::{EscalationCheck, EscalationDetector};
pub use narrative_analyzer::NarrativeAnalyzer;
pub use proposals::{ProposalGenerator, ResolutionProposal};
pub use signals::{
    AnalysisOptions, NarrativeFindings, ParticipantSignals, SignalsPatch, MAX_SIGNAL_ITEMS,
};
pub use snapshot::{
    ConflictSnapshot, EmotionalPattern, ParticipantNeeds, SnapshotSynthesizer,
    HIGH_INTENSITY_THRESHOLD, STANDARD_MISUNDERSTANDINGS, STANDARD_OPPORTUNITIES,
};
