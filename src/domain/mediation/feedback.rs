//! Post-session feedback.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Rating, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFeedback {
    pub rating: Rating,
    pub helpful: String,
    pub suggestions: String,
    pub would_recommend: Option<bool>,
    pub submitted_at: Timestamp,
}

impl SessionFeedback {
    pub fn new(
        rating: Rating,
        helpful: impl Into<String>,
        suggestions: impl Into<String>,
        would_recommend: Option<bool>,
    ) -> Self {
        Self {
            rating,
            helpful: helpful.into().trim().to_string(),
            suggestions: suggestions.into().trim().to_string(),
            would_recommend,
            submitted_at: Timestamp::now(),
        }
    }
}
