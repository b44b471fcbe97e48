//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, ratings, errors)
//! - `lexicon` - Keyword tables driving narrative analysis
//! - `analysis` - Pure analyzers (signals, emotion, snapshot, escalation, proposals)
//! - `mediation` - The mediation session aggregate and its phase machine
//! - `capture` - Voice capture vocabulary and transcript buffering

pub mod analysis;
pub mod capture;
pub mod foundation;
pub mod lexicon;
pub mod mediation;
