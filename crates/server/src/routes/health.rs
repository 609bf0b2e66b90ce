//! Health check endpoint

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;
use crate::ai::GeminiClient;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    diseases: usize,
    ai_configured: bool,
}

/// GET /health - Report dataset size and collaborator configuration
pub async fn check(
    State(state): State<AppState>,
    Extension(client): Extension<Option<GeminiClient>>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            diseases: state.dataset.len(),
            ai_configured: client.is_some(),
        }),
    )
}
