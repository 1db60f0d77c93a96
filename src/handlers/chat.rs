use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::AssistantReply;
use crate::services::assistant;
use crate::state::AppState;

// POST /api/chat
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Absent on the first turn; the server assigns one and echoes it back.
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub session_id: String,
    pub data: AssistantReply,
    pub timestamp: String,
}

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match body.message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => return Err(AppError::Validation("message is required".to_string())),
    };

    let session_id = body
        .session_id
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let reply = assistant::process_message(&state, &session_id, &message);

    Ok(Json(ChatResponse {
        success: true,
        session_id,
        data: reply,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
