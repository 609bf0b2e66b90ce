pub mod chat;
pub mod health;
pub mod metrics;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::AppState;

/// Build conversation routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(chat::send))
        .route("/{session_id}/transcript", get(chat::transcript))
        .route("/{session_id}", delete(chat::reset))
}
