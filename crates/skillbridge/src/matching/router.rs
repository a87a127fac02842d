use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{RequestId, ScoredCandidate};
use super::explain::ExplanationClient;
use super::repository::ProfileStore;
use super::service::{CoachMatchingService, ExplanationSource, MatchOutcome, MatchingError};

/// Router builder exposing the coach-matching endpoint.
pub fn match_router<S, E>(service: Arc<CoachMatchingService<S, E>>) -> Router
where
    S: ProfileStore + 'static,
    E: ExplanationClient + 'static,
{
    Router::new()
        .route("/api/v1/match-coach", post(match_coach_handler::<S, E>))
        .with_state(service)
}

/// Request body; both snake_case and camelCase spellings are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct MatchCoachRequest {
    #[serde(default, alias = "requestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchCoachResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_fetched: Option<String>,
    pub recommended_coach: Option<String>,
    pub ai_reasoning: String,
    pub explanation_source: ExplanationSource,
    pub all_matches: Vec<ScoredCandidate>,
}

impl From<MatchOutcome> for MatchCoachResponse {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            status: "success",
            student_fetched: outcome.requester.role.clone(),
            recommended_coach: outcome.recommended_coach,
            ai_reasoning: outcome.ai_reasoning,
            explanation_source: outcome.explanation_source,
            all_matches: outcome.all_matches,
        }
    }
}

pub(crate) async fn match_coach_handler<S, E>(
    State(service): State<Arc<CoachMatchingService<S, E>>>,
    axum::Json(payload): axum::Json<MatchCoachRequest>,
) -> Response
where
    S: ProfileStore + 'static,
    E: ExplanationClient + 'static,
{
    let Some(request_id) = payload
        .request_id
        .filter(|id| !id.trim().is_empty())
    else {
        return error_response(StatusCode::BAD_REQUEST, "Request ID is required");
    };

    match service.match_coaches(&RequestId(request_id)).await {
        Ok(outcome) => {
            (StatusCode::OK, axum::Json(MatchCoachResponse::from(outcome))).into_response()
        }
        Err(err @ (MatchingError::RequesterNotFound(_) | MatchingError::NoCandidates)) => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string()),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let payload = json!({
        "status": "error",
        "error": message,
    });
    (status, axum::Json(payload)).into_response()
}
