//! Peace Pact agreement drafted from the selected proposal.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::ResolutionProposal;
use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

use super::participant::Participant;

pub const PACT_TITLE: &str = "Peace Pact Agreement";

const COMMITMENTS: [&str; 5] = [
    "We will treat each other with respect and dignity",
    "We will communicate openly and honestly",
    "We will assume positive intent in our interactions",
    "We will address concerns directly rather than letting them fester",
    "We will revisit this agreement in 30 days to assess our progress",
];

const DISAGREEMENT_STEPS: [&str; 4] = [
    "Take a 24-hour cooling-off period if emotions are high",
    "Use \"I\" statements to express our feelings",
    "Focus on solutions rather than blame",
    "Seek mediation again if needed",
];

/// Written agreement reviewed and approved by the participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeacePact {
    pub title: String,
    pub date: String,
    /// Display names joined with " and ".
    pub participants: String,
    pub content: String,
    pub edited: bool,
}

impl PeacePact {
    /// Renders the agreement text.
    pub fn draft(
        session_id: &SessionId,
        participants: &[Participant],
        proposal: &ResolutionProposal,
        drafted_at: &Timestamp,
    ) -> Self {
        let date = drafted_at.date_label();
        let names = participants
            .iter()
            .map(|p| p.display_name.as_str())
            .collect::<Vec<_>>()
            .join(" and ");

        let actions = bullets(proposal.action_items.iter().map(String::as_str));
        let commitments = bullets(COMMITMENTS.iter().copied());
        let steps = DISAGREEMENT_STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n");
        let signatures = participants
            .iter()
            .map(|p| format!("{}: ________________    Date: ________", p.display_name))
            .collect::<Vec<_>>()
            .join("\n\n");

        let content = format!(
            "**{title}**\n\n\
             Date: {date}\n\
             Participants: {names}\n\n\
             **Our Commitment to Resolution**\n\n\
             We, {names}, have engaged in facilitated mediation to address our conflict and find a path forward. Through this process, we have:\n\n\
             ✓ Shared our perspectives openly and honestly\n\
             ✓ Listened to each other with empathy\n\
             ✓ Identified our common values and shared goals\n\
             ✓ Acknowledged the pain and misunderstandings between us\n\n\
             **Our Agreed Resolution: {proposal_title}**\n\n\
             {proposal_description}\n\n\
             **Specific Actions We Will Take:**\n\n\
             {actions}\n\n\
             **Our Commitments Moving Forward:**\n\n\
             {commitments}\n\n\
             **Conflict Resolution Process:**\n\n\
             If disagreements arise, we agree to:\n\
             {steps}\n\n\
             **Signatures:**\n\n\
             {signatures}\n\n\
             **Session ID:** {session_id}\n\
             **Date:** {date}\n\n\
             ---\n\n\
             *This agreement was created through facilitated conflict resolution. While not legally binding, it represents our mutual commitment to positive change and respectful interaction.*",
            title = PACT_TITLE,
            proposal_title = proposal.title,
            proposal_description = proposal.description,
        );

        Self {
            title: PACT_TITLE.to_string(),
            date,
            participants: names,
            content,
            edited: false,
        }
    }

    /// Replaces the agreement text.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new text is blank
    pub fn edit(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("draft"));
        }
        self.content = content;
        self.edited = true;
        Ok(())
    }
}

fn bullets<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.map(|l| format!("• {}", l)).collect::<Vec<_>>().join("\n")
}
