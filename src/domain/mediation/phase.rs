//! Session and round phases.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Sub-phase of the structured dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    Acknowledgment,
    Clarification,
    Resolution,
}

impl RoundPhase {
    pub const ALL: [RoundPhase; 3] = [
        RoundPhase::Acknowledgment,
        RoundPhase::Clarification,
        RoundPhase::Resolution,
    ];

    /// Phase that follows this one, `None` after resolution.
    pub fn next(&self) -> Option<RoundPhase> {
        match self {
            RoundPhase::Acknowledgment => Some(RoundPhase::Clarification),
            RoundPhase::Clarification => Some(RoundPhase::Resolution),
            RoundPhase::Resolution => None,
        }
    }

    /// True for phases in which every participant speaks in turn.
    pub fn is_dialogue(&self) -> bool {
        !matches!(self, RoundPhase::Resolution)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPhase::Acknowledgment => "acknowledgment",
            RoundPhase::Clarification => "clarification",
            RoundPhase::Resolution => "resolution",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RoundPhase::Acknowledgment => "Acknowledgment Phase",
            RoundPhase::Clarification => "Clarification Phase",
            RoundPhase::Resolution => "Resolution Proposals",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            RoundPhase::Acknowledgment => {
                "Let's start by acknowledging each other. Please reflect on what you heard from the other person."
            }
            RoundPhase::Clarification => "Now, let's clarify any misunderstandings.",
            RoundPhase::Resolution => {
                "Based on what I've heard, here are some neutral ideas for moving forward."
            }
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            RoundPhase::Acknowledgment => {
                "What did you hear from their perspective? What can you acknowledge about their experience?"
            }
            RoundPhase::Clarification => {
                "Is there anything you'd like to ask or explain? What would help the other person understand your perspective better?"
            }
            RoundPhase::Resolution => {
                "Which approach feels right to you? Feel free to suggest modifications or your own ideas."
            }
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level lifecycle of a mediation session.
///
/// ```text
/// ConsentPending -> IdentitySetup -> Intake -> AlignmentReview
///   -> Round(Acknowledgment) -> Round(Clarification) -> Round(Resolution)
///   -> DraftReview -> Complete
///
/// Round(r) <-> Paused(r)
/// ```
///
/// Reset is not an edge of this machine; it replaces the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    ConsentPending,
    IdentitySetup,
    Intake,
    AlignmentReview,
    Round(RoundPhase),
    Paused(RoundPhase),
    DraftReview,
    Complete,
}

impl SessionPhase {
    /// Round sub-phase when in a round or paused in one.
    pub fn round_phase(&self) -> Option<RoundPhase> {
        match self {
            SessionPhase::Round(phase) | SessionPhase::Paused(phase) => Some(*phase),
            _ => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, SessionPhase::Paused(_))
    }
}

impl StateMachine for SessionPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        match (self, target) {
            (ConsentPending, IdentitySetup)
            | (IdentitySetup, Intake)
            | (Intake, AlignmentReview)
            | (AlignmentReview, Round(RoundPhase::Acknowledgment))
            | (Round(RoundPhase::Resolution), DraftReview)
            | (DraftReview, Complete) => true,
            (Round(from), Round(to)) => from.next() == Some(*to),
            (Round(from), Paused(to)) | (Paused(from), Round(to)) => from == to,
            _ => false,
        }
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            ConsentPending => vec![IdentitySetup],
            IdentitySetup => vec![Intake],
            Intake => vec![AlignmentReview],
            AlignmentReview => vec![Round(RoundPhase::Acknowledgment)],
            Round(phase) => {
                let forward = match phase.next() {
                    Some(next) => Round(next),
                    None => DraftReview,
                };
                vec![forward, Paused(*phase)]
            }
            Paused(phase) => vec![Round(*phase)],
            DraftReview => vec![Complete],
            Complete => vec![],
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::ConsentPending => write!(f, "consent_pending"),
            SessionPhase::IdentitySetup => write!(f, "identity_setup"),
            SessionPhase::Intake => write!(f, "intake"),
            SessionPhase::AlignmentReview => write!(f, "alignment_review"),
            SessionPhase::Round(phase) => write!(f, "round({})", phase),
            SessionPhase::Paused(phase) => write!(f, "paused({})", phase),
            SessionPhase::DraftReview => write!(f, "draft_review"),
            SessionPhase::Complete => write!(f, "complete"),
        }
    }
}
