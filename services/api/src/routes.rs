use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use pharma_intel::workflows::scoring::{ContentArtifact, ScoreBreakdown, ScoringEngine};
use pharma_intel::workflows::submissions::{
    intelligence_router, IntelligenceReport, IntelligenceRepository, IntelligenceService,
    ResearchSubmission,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// One-shot scoring request that skips the repository.
#[derive(Debug, Deserialize)]
pub(crate) struct PreviewScoreRequest {
    pub(crate) submission: ResearchSubmission,
    #[serde(default)]
    pub(crate) artifact: ContentArtifact,
}

pub(crate) fn with_intelligence_routes<R>(service: Arc<IntelligenceService<R>>) -> axum::Router
where
    R: IntelligenceRepository + 'static,
{
    intelligence_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/intelligence/preview",
            axum::routing::post(preview_endpoint),
        )
        .route(
            "/api/v1/intelligence/preview/score",
            axum::routing::post(preview_score_endpoint),
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

pub(crate) async fn preview_endpoint(
    Json(submission): Json<ResearchSubmission>,
) -> Json<IntelligenceReport> {
    Json(IntelligenceReport::from_submission(submission))
}

pub(crate) async fn preview_score_endpoint(
    Json(request): Json<PreviewScoreRequest>,
) -> Json<ScoreBreakdown> {
    let PreviewScoreRequest {
        submission,
        artifact,
    } = request;
    let report = IntelligenceReport::from_submission(submission);
    Json(ScoringEngine::default().score(&report.summary, &artifact))
}
