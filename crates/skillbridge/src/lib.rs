//! Core library for the SkillBridge coaching platform.
//!
//! Two cooperating cores live here: [`matching`] scores and ranks candidate
//! coaches against a requester profile and asks a generative-text service for
//! a rationale, and [`assessment`] turns questionnaire answers into parameter
//! scores, an overall score, and a skill-level readout. Configuration,
//! telemetry, and the app-boundary error type round out the crate.

pub mod assessment;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
