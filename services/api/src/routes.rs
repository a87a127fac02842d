use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use skillbridge::assessment::{compute_result, AssessmentAnswer, AssessmentResult, Game};
use skillbridge::matching::{
    match_router, CoachMatchingService, ExplanationClient, ProfileStore,
};
use std::collections::BTreeMap;
use std::sync::Arc;

pub(crate) fn with_match_routes<S, E>(service: Arc<CoachMatchingService<S, E>>) -> axum::Router
where
    S: ProfileStore + 'static,
    E: ExplanationClient + 'static,
{
    match_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/assessment/score",
            axum::routing::post(assessment_score_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentScoreRequest {
    #[serde(default)]
    pub(crate) game: Option<String>,
    pub(crate) answers: BTreeMap<u8, AssessmentAnswer>,
}

/// Pure transform endpoint; unknown games and unrecognized answer phrases
/// score permissively instead of erroring.
pub(crate) async fn assessment_score_endpoint(
    Json(payload): Json<AssessmentScoreRequest>,
) -> Json<AssessmentResult> {
    let game = payload.game.as_deref().and_then(Game::from_key);
    Json(compute_result(game, &payload.answers))
}
