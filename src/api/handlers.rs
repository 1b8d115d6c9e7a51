//! API request handlers

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::types::{AnalysisMode, ClassificationResult};

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

type AnalysisResponse = Result<Json<ClassificationResult>, (StatusCode, Json<ErrorResponse>)>;

// Shared body of the three analysis routes. The upload is never read, so any
// body (empty, multipart, oversized) gets the same answer.
async fn analyze(state: &AppState, mode: AnalysisMode, headers: &HeaderMap) -> AnalysisResponse {
    let declared_len = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    tracing::debug!(%mode, ?declared_len, "Analysis requested");

    let result = state.pipeline.run(mode).await.map_err(|e| {
        tracing::error!("{} analysis failed: {}", mode, e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(result))
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Classify a recorded or uploaded audio clip
#[utoipa::path(
    post,
    path = "/analyze/audio",
    responses(
        (status = 200, description = "Classification result", body = ClassificationResult),
        (status = 500, description = "Pipeline failure", body = ErrorResponse)
    ),
    tag = "analyze"
)]
pub async fn analyze_audio(State(state): State<AppState>, headers: HeaderMap) -> AnalysisResponse {
    analyze(&state, AnalysisMode::Audio, &headers).await
}

/// Classify a captured or uploaded image
#[utoipa::path(
    post,
    path = "/analyze/image",
    responses(
        (status = 200, description = "Classification result", body = ClassificationResult),
        (status = 500, description = "Pipeline failure", body = ErrorResponse)
    ),
    tag = "analyze"
)]
pub async fn analyze_image(State(state): State<AppState>, headers: HeaderMap) -> AnalysisResponse {
    analyze(&state, AnalysisMode::Image, &headers).await
}

/// Classify audio and image together
#[utoipa::path(
    post,
    path = "/analyze/fusion",
    responses(
        (status = 200, description = "Classification result", body = ClassificationResult),
        (status = 500, description = "Pipeline failure", body = ErrorResponse)
    ),
    tag = "analyze"
)]
pub async fn analyze_fusion(State(state): State<AppState>, headers: HeaderMap) -> AnalysisResponse {
    analyze(&state, AnalysisMode::Fusion, &headers).await
}
