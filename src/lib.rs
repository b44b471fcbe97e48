//! Peace Pact - Structured Multi-Party Conflict Mediation
//!
//! This crate guides two to six participants from private narratives to a
//! written agreement: keyword analysis of each narrative, a shared conflict
//! snapshot, a three-round facilitated dialogue with escalation checks, and a
//! drafted peace pact.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
