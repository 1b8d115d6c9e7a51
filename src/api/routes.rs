//! API route definitions

use axum::{
    Json, Router,
    extract::Path,
    routing::{get, post},
    response::{IntoResponse, Response},
    http::{StatusCode, header},
};
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{self, ErrorResponse, HealthResponse};
use crate::config::Config;
use crate::pipeline::{FixedPipeline, Pipeline};
use crate::types::{AnalysisMode, ClassificationResult, SubjectType};

/// Embedded landing page and its static assets
#[derive(RustEmbed)]
#[folder = "assets"]
struct Asset;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WLDS API",
        version = "0.1.0",
        description = "Species classification from audio, image and fused input"
    ),
    tags(
        (name = "analyze", description = "Classification endpoints"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::analyze_audio,
        handlers::analyze_image,
        handlers::analyze_fusion,
    ),
    components(schemas(
        ClassificationResult,
        SubjectType,
        AnalysisMode,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;

fn serve_asset(path: &str) -> Response {
    match Asset::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Landing page
async fn index() -> Response {
    serve_asset("index.html")
}

/// Scripts and stylesheets under `/static`
async fn static_handler(Path(path): Path<String>) -> Response {
    serve_asset(&format!("static/{}", path))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<dyn Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<dyn Pipeline>) -> Self {
        Self { pipeline }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(FixedPipeline::new()))
    }
}

/// Create the API router
pub fn create_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        // Landing page
        .route("/", get(index))
        .route("/static/{*path}", get(static_handler))

        // Analysis
        .route("/analyze/audio", post(handlers::analyze_audio))
        .route("/analyze/image", post(handlers::analyze_image))
        .route("/analyze/fusion", post(handlers::analyze_fusion))

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI spec
        .route("/api/openapi.json", get(openapi_json));

    let router = if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_embedded() {
        let page = Asset::get("index.html").expect("index.html should be embedded");
        assert!(!page.data.is_empty());
    }

    #[test]
    fn test_openapi_lists_analysis_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/analyze/audio", "/analyze/image", "/analyze/fusion", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
