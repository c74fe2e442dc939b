use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ResearchSubmission, SubmissionId, SubmissionView};
use super::repository::{IntelligenceRepository, RepositoryError};
use super::service::{IntelligenceService, SubmissionServiceError};
use crate::workflows::scoring::ContentArtifact;

const DEFAULT_RECENT_LIMIT: usize = 20;

/// Router exposing submission intake, lookup, and artifact scoring.
pub fn intelligence_router<R>(service: Arc<IntelligenceService<R>>) -> Router
where
    R: IntelligenceRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/intelligence/submissions",
            post(submit_handler::<R>).get(recent_handler::<R>),
        )
        .route(
            "/api/v1/intelligence/submissions/:submission_id",
            get(fetch_handler::<R>),
        )
        .route(
            "/api/v1/intelligence/submissions/:submission_id/score",
            post(score_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<IntelligenceService<R>>>,
    axum::Json(submission): axum::Json<ResearchSubmission>,
) -> Response
where
    R: IntelligenceRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(SubmissionServiceError::Repository(RepositoryError::Conflict)) => error_response(
            StatusCode::CONFLICT,
            "submission already exists".to_string(),
        ),
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<IntelligenceService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: IntelligenceRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => failure_response(&id, error),
    }
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<IntelligenceService<R>>>,
    Path(submission_id): Path<String>,
    axum::Json(artifact): axum::Json<ContentArtifact>,
) -> Response
where
    R: IntelligenceRepository + 'static,
{
    let id = SubmissionId(submission_id);
    match service.score(&id, &artifact) {
        Ok(breakdown) => (StatusCode::OK, axum::Json(breakdown)).into_response(),
        Err(error) => failure_response(&id, error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecentQuery {
    limit: Option<usize>,
}

pub(crate) async fn recent_handler<R>(
    State(service): State<Arc<IntelligenceService<R>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: IntelligenceRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    match service.recent(limit) {
        Ok(records) => {
            let views: Vec<SubmissionView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    }
}

fn failure_response(id: &SubmissionId, error: SubmissionServiceError) -> Response {
    if error.is_not_found() {
        let payload = json!({
            "submission_id": id.0,
            "error": "submission not found",
        });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    }
    error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}

fn error_response(status: StatusCode, message: String) -> Response {
    let payload = json!({
        "error": message,
    });
    (status, axum::Json(payload)).into_response()
}
