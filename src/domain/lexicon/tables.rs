//! Built-in trigger word tables.
//!
//! All entries are lowercase; matching lowercases the input text.

use super::{EmotionCategory, ValueCategory};

/// Words marking a sentence as a pain point.
pub const PAIN_INDICATORS: &[&str] = &[
    "hurt",
    "frustrated",
    "angry",
    "disappointed",
    "upset",
    "bothered",
    "annoyed",
];

/// Keyword variants per value category, in report order.
pub const VALUE_KEYWORDS: &[(ValueCategory, &[&str])] = &[
    (ValueCategory::Respect, &["respect", "dignity", "honor"]),
    (ValueCategory::Trust, &["trust", "honesty", "reliability"]),
    (
        ValueCategory::Communication,
        &["communication", "listening", "understanding"],
    ),
    (ValueCategory::Fairness, &["fair", "equal", "just"]),
    (ValueCategory::Support, &["support", "help", "care"]),
    (ValueCategory::Autonomy, &["independence", "freedom", "choice"]),
];

/// First-person intent phrases that mark a sentence as a need.
pub const NEED_PHRASES: &[&str] = &["i need", "i want", "i require", "i wish", "i hope"];

/// Keywords per emotion category. `Neutral` has none.
pub const EMOTION_KEYWORDS: &[(EmotionCategory, &[&str])] = &[
    (
        EmotionCategory::Anger,
        &[
            "angry", "furious", "mad", "hate", "frustrated", "annoyed", "pissed", "outraged",
        ],
    ),
    (
        EmotionCategory::Sadness,
        &[
            "sad",
            "hurt",
            "disappointed",
            "broken",
            "devastated",
            "upset",
            "depressed",
            "heartbroken",
        ],
    ),
    (
        EmotionCategory::Fear,
        &[
            "scared",
            "worried",
            "anxious",
            "nervous",
            "afraid",
            "concerned",
            "terrified",
            "panicked",
        ],
    ),
    (
        EmotionCategory::Joy,
        &[
            "happy", "glad", "pleased", "grateful", "thankful", "hopeful", "excited", "delighted",
        ],
    ),
    (EmotionCategory::Neutral, &[]),
];

/// Phrases in live dialogue that signal escalation risk.
pub const ESCALATION_TRIGGERS: &[&str] = &["never", "always", "hate", "stupid", "idiot", "shut up"];
