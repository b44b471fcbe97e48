//! Resolution Proposal Generator - fixed templates keyed by snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProposalId;

use super::snapshot::ConflictSnapshot;

/// Candidate resolution presented during the resolution round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionProposal {
    pub id: ProposalId,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

impl ResolutionProposal {
    fn new(id: u8, title: &str, description: &str, action_items: Vec<String>) -> Self {
        Self {
            id: ProposalId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            action_items,
        }
    }
}

/// Stateless proposal generator.
pub struct ProposalGenerator;

impl ProposalGenerator {
    /// Always returns the same three proposals; only the shared-values
    /// action item depends on the snapshot.
    pub fn generate(snapshot: &ConflictSnapshot) -> Vec<ResolutionProposal> {
        vec![
            ResolutionProposal::new(
                1,
                "Structured Communication Plan",
                "Establish regular check-ins with agreed-upon communication guidelines",
                items(&[
                    "Weekly 30-minute conversations",
                    "Use 'I' statements to express feelings",
                    "Listen without interrupting",
                    "Focus on solutions, not blame",
                ]),
            ),
            ResolutionProposal::new(
                2,
                "Mutual Respect Agreement",
                "Create clear boundaries and expectations based on shared values",
                std::iter::once(format!(
                    "Honor shared values: {}",
                    snapshot.common_values_label()
                ))
                .chain(items(&[
                    "Respect each other's perspectives",
                    "Acknowledge past hurts without dwelling",
                    "Commit to moving forward constructively",
                ]))
                .collect(),
            ),
            ResolutionProposal::new(
                3,
                "Graduated Resolution Steps",
                "Start with small changes and build trust gradually",
                items(&[
                    "Begin with one specific area of improvement",
                    "Check progress weekly",
                    "Celebrate small wins together",
                    "Address larger issues as trust rebuilds",
                ]),
            ),
        ]
    }
}

fn items(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}
