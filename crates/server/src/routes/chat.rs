//! Conversation endpoint handlers
//!
//! `send` is the per-turn orchestrator: parse input, run the follow-up
//! controller, then either render the clarification prompt, a matched
//! dataset record, or the formatted fallback answer, and append the turn
//! to the session transcript.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use healthbot_core::{FollowupOutcome, Turn, find_match, followup_prompt, render_record};

use crate::AppState;
use crate::ai::{self, GeminiClient};
use crate::error::AppError;

/// Request body for a chat turn
#[derive(Deserialize)]
pub struct ChatRequest {
    /// Omitted on the first turn; the server assigns one.
    pub session_id: Option<Uuid>,
    pub message: String,
}

/// Response body for a chat turn
#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    /// HTML fragment to render as the bot reply.
    pub reply: String,
}

/// Response body for a transcript read
#[derive(Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub turns: Vec<Turn>,
}

/// POST /chat - Run one conversational turn
pub async fn send(
    State(state): State<AppState>,
    Extension(client): Extension<Option<GeminiClient>>,
    Json(body): Json<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = body.session_id.unwrap_or_else(Uuid::new_v4);
    let input = body.message.trim().to_lowercase();

    tracing::info!(session_id = %session_id, "Chat turn");

    // Follow-up controller; the lock is released before any await.
    let outcome = state
        .sessions
        .with_session(session_id, |conversation| {
            conversation.evaluate(&input, &state.dataset)
        });

    let (user_text, reply) = match outcome {
        FollowupOutcome::AskFollowup => (input.clone(), followup_prompt(&input)),
        FollowupOutcome::Proceed {
            input: effective,
            tokens,
        } => {
            let reply = match find_match(&tokens, &state.dataset) {
                Some(record) => {
                    tracing::info!(disease = %record.name, "Dataset match");
                    render_record(record)
                }
                None => ai::fallback::diagnose(client.as_ref(), &effective).await,
            };
            (effective, reply)
        }
    };

    state.sessions.with_session(session_id, |conversation| {
        conversation.push_turn(user_text, reply.clone());
    });

    Ok(Json(ChatResponse { session_id, reply }))
}

/// GET /chat/{session_id}/transcript - Read a session transcript
pub async fn transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    match state.sessions.transcript(session_id) {
        Some(turns) => Ok(Json(TranscriptResponse { session_id, turns })),
        None => Err(AppError::NotFound(format!(
            "Session {} not found",
            session_id
        ))),
    }
}

/// DELETE /chat/{session_id} - Discard a session and its transcript
pub async fn reset(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.sessions.remove(session_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Session {} not found",
            session_id
        )))
    }
}
