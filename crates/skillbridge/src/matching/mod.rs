//! Coach matching pipeline: score a candidate pool against a requester
//! profile, rank the results, and ask a generative-text service for a
//! human-readable rationale.
//!
//! The scorer is deliberately coarse: a handful of additive weighted rules
//! over exact and substring matches, capped at 100. The explanation call is
//! the only network hop and is never allowed to fail the overall response;
//! the ranked list is computed first and a static fallback string stands in
//! when the upstream service is unavailable.

pub mod domain;
pub mod explain;
pub mod rank;
pub mod repository;
pub mod router;
pub mod score;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Candidate, Category, MatchFactor, RequestId, RequesterProfile, ScoreComponent, ScoredCandidate};
pub use explain::{
    build_prompt, ExplanationClient, ExplanationError, GeminiClient, FALLBACK_EXPLANATION,
};
pub use rank::{rank, TOP_MATCHES};
pub use repository::{ProfileStore, StoreError, CANDIDATE_POOL_LIMIT};
pub use router::match_router;
pub use score::{MatchWeights, ScoreEngine};
pub use service::{
    CoachMatchingService, ExplanationSource, MatchOutcome, MatchingConfig, MatchingError,
};
