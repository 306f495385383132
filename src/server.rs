//! HTTP server assembly.

use std::sync::Arc;

use assessment_protocol::{AnalyzeRequest, ValidatedJson};
use axum::{
    extract::{DefaultBodyLimit, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{gateway::ModelGateway, routers::AnalyzeRouter};

/// Process-wide shared state, built once at startup and cheaply cloned
/// per request.
#[derive(Clone)]
pub struct AppState {
    analyze_router: Arc<AnalyzeRouter>,
}

/// Assemble the axum application.
pub fn build_router(gateway: Arc<dyn ModelGateway>, max_body_bytes: usize) -> Router {
    let state = AppState {
        analyze_router: Arc::new(AnalyzeRouter::new(gateway)),
    };

    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn analyze(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeRequest>,
) -> Response {
    state.analyze_router.route_analyze(request).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
