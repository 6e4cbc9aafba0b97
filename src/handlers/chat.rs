use axum::{extract::State, Extension, Json};

use crate::auth::middleware::AuthUser;
use crate::error::ChatError;
use crate::services::chat::{ChatReply, ChatRequest};
use crate::AppState;

pub async fn emotional_chat(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ChatError> {
    tracing::info!(
        user_id = %auth_user.id,
        has_mood = body.mood.as_deref().is_some_and(|m| !m.trim().is_empty()),
        message_len = body.message.len(),
        "Emotional chat request"
    );

    let reply = state.chat.reply(&body).await?;
    Ok(Json(reply))
}
