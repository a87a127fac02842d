//! Questionnaire scoring: a pure, deterministic transform from a fixed
//! 10-question assessment's answers to parameter scores, an overall score,
//! a skill-level label, and coaching hints.
//!
//! Answer phrases map to scores through explicit lookup tables (a shared base
//! table plus per-game overrides) so product tuning never requires code
//! changes. Unrecognized phrases fall back to a neutral score rather than
//! erroring; the questionnaire is closed-set but the lookup is deliberately
//! permissive.

pub mod domain;
pub mod scorer;
pub mod tables;

pub use domain::{
    AssessmentAnswer, AssessmentResult, Game, ParameterScore, Priority, Recommendation,
    SkillBreakdown, SkillLevel,
};
pub use scorer::compute_result;
pub use tables::DEFAULT_CHOICE_SCORE;
