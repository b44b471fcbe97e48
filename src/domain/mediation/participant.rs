//! Participant identity resolved at registration.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ParticipantId, ValidationError};

/// Fewest participants a mediation can run with.
pub const MIN_PARTICIPANTS: usize = 2;

/// Most participants a mediation can run with.
pub const MAX_PARTICIPANTS: usize = 6;

/// Identity details as entered by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticipantRegistration {
    pub alias: Option<String>,
    pub preferred_name: Option<String>,
}

impl ParticipantRegistration {
    pub fn alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            preferred_name: None,
        }
    }

    pub fn preferred_name(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            preferred_name: Some(name.into()),
        }
    }

    /// True when at least one of alias and preferred name is non-blank.
    pub fn is_identified(&self) -> bool {
        non_blank(&self.alias).is_some() || non_blank(&self.preferred_name).is_some()
    }
}

/// A registered participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
}

impl Participant {
    /// Resolves the display name: alias, then preferred name, then
    /// `"Participant {id}"`. Blank values are skipped.
    pub fn resolve_display_name(
        id: ParticipantId,
        registration: &ParticipantRegistration,
    ) -> String {
        non_blank(&registration.alias)
            .or_else(|| non_blank(&registration.preferred_name))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Participant {}", id))
    }

    /// Registers a full roster, numbering participants from 1.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if fewer than 2 or more than 6 entries are given
    /// - `EmptyField` if an entry has neither alias nor preferred name
    pub fn register_all(
        registrations: &[ParticipantRegistration],
    ) -> Result<Vec<Participant>, ValidationError> {
        let count = registrations.len();
        if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
            return Err(ValidationError::out_of_range(
                "participants",
                MIN_PARTICIPANTS as i32,
                MAX_PARTICIPANTS as i32,
                count as i32,
            ));
        }

        registrations
            .iter()
            .enumerate()
            .map(|(index, registration)| {
                let id = ParticipantId::from_index(index);
                if !registration.is_identified() {
                    return Err(ValidationError::empty_field(format!(
                        "participants[{}].alias_or_preferred_name",
                        id
                    )));
                }
                Ok(Participant {
                    id,
                    display_name: Self::resolve_display_name(id, registration),
                })
            })
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
