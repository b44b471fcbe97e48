//! Narrative classifier adapters.

mod keyword;

pub use keyword::KeywordClassifier;
