use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::domain::{RequestId, RequesterProfile, ScoredCandidate};
use super::explain::{ExplanationClient, FALLBACK_EXPLANATION};
use super::rank::{rank, TOP_MATCHES};
use super::repository::{ProfileStore, StoreError, CANDIDATE_POOL_LIMIT};
use super::score::{MatchWeights, ScoreEngine};

/// Knobs for the matching pipeline. Defaults reproduce the shipped product
/// behavior: 40/30/20/10 weights, top 3 matches, 45 s explanation timeout.
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    pub weights: MatchWeights,
    pub top_matches: usize,
    pub candidate_pool_limit: usize,
    pub explanation_timeout: Duration,
    pub explanation_backoff: Duration,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            top_matches: TOP_MATCHES,
            candidate_pool_limit: CANDIDATE_POOL_LIMIT,
            explanation_timeout: Duration::from_secs(45),
            explanation_backoff: Duration::from_millis(500),
        }
    }
}

/// Where the rationale text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationSource {
    Model,
    Fallback,
}

/// Full result of one matching request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub requester: RequesterProfile,
    pub recommended_coach: Option<String>,
    pub ai_reasoning: String,
    pub explanation_source: ExplanationSource,
    pub all_matches: Vec<ScoredCandidate>,
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchingError {
    #[error("coaching request '{0}' not found")]
    RequesterNotFound(String),
    #[error("no coaches found in database")]
    NoCandidates,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service composing the profile store, score engine, ranker, and
/// explanation gateway.
///
/// Each call is request-scoped: independent reads in, independent outcome
/// out, no state shared between concurrent requests.
pub struct CoachMatchingService<S, E> {
    store: Arc<S>,
    explainer: Arc<E>,
    engine: ScoreEngine,
    config: MatchingConfig,
}

impl<S, E> CoachMatchingService<S, E>
where
    S: ProfileStore + 'static,
    E: ExplanationClient + 'static,
{
    pub fn new(store: Arc<S>, explainer: Arc<E>, config: MatchingConfig) -> Self {
        let engine = ScoreEngine::new(config.weights);
        Self {
            store,
            explainer,
            engine,
            config,
        }
    }

    /// Run the full pipeline for one coaching request.
    ///
    /// The ranked list is complete before the explanation call is attempted,
    /// so an upstream failure degrades only the rationale text.
    pub async fn match_coaches(
        &self,
        request_id: &RequestId,
    ) -> Result<MatchOutcome, MatchingError> {
        let requester = self
            .store
            .get_requester(request_id)?
            .ok_or_else(|| MatchingError::RequesterNotFound(request_id.0.clone()))?;

        let candidates = self
            .store
            .list_candidates(None, self.config.candidate_pool_limit)?;
        if candidates.is_empty() {
            return Err(MatchingError::NoCandidates);
        }

        debug!(
            request_id = %request_id.0,
            pool_size = candidates.len(),
            "scoring candidate pool"
        );

        let scored: Vec<ScoredCandidate> = candidates
            .iter()
            .map(|candidate| self.engine.score(&requester, candidate))
            .collect();
        let top_matches = rank(scored, self.config.top_matches);

        let (ai_reasoning, explanation_source) =
            self.explanation_with_fallback(&requester, &top_matches).await;

        let recommended_coach = top_matches
            .first()
            .map(|scored| scored.candidate.name.clone());

        info!(
            request_id = %request_id.0,
            matches = top_matches.len(),
            source = ?explanation_source,
            "matching request completed"
        );

        Ok(MatchOutcome {
            requester,
            recommended_coach,
            ai_reasoning,
            explanation_source,
            all_matches: top_matches,
        })
    }

    /// One attempt plus one retry with a short backoff, each bounded by the
    /// configured timeout. Any failure degrades to the static fallback text.
    async fn explanation_with_fallback(
        &self,
        requester: &RequesterProfile,
        top_matches: &[ScoredCandidate],
    ) -> (String, ExplanationSource) {
        for attempt in 0..2u8 {
            if attempt > 0 {
                tokio::time::sleep(self.config.explanation_backoff).await;
            }

            match tokio::time::timeout(
                self.config.explanation_timeout,
                self.explainer.explain(requester, top_matches),
            )
            .await
            {
                Ok(Ok(text)) => return (text, ExplanationSource::Model),
                Ok(Err(err)) => {
                    warn!(%err, attempt, "explanation request failed");
                }
                Err(_) => {
                    warn!(
                        attempt,
                        timeout_secs = self.config.explanation_timeout.as_secs(),
                        "explanation request timed out"
                    );
                }
            }
        }

        (FALLBACK_EXPLANATION.to_string(), ExplanationSource::Fallback)
    }
}
