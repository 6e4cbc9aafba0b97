use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::db::mood_entries::{insert_mood_entry, list_mood_entries};
use crate::error::{AppError, AppResult};
use crate::models::mood_entry::{AnalyzeRequest, MoodEntry, NewMoodEntry};
use crate::services::classifier::{classify, Theme};
use crate::AppState;

pub const EMPTY_TEXT_NOTICE: &str = "Please tell us how you're feeling first.";

#[derive(Debug, Serialize)]
pub struct AnalyzedEntry {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub theme: Theme,
}

pub async fn create_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<AnalyzeRequest>,
) -> AppResult<(StatusCode, Json<AnalyzedEntry>)> {
    if body.feelings_text.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_TEXT_NOTICE.into()));
    }

    let analysis = classify(&body.feelings_text);
    let new_entry = NewMoodEntry::from_analysis(auth_user.id, body.feelings_text, body.weather, &analysis);
    let entry = insert_mood_entry(&state.db, &new_entry).await?;

    tracing::info!(
        user_id = %auth_user.id,
        entry_id = %entry.id,
        mood = %entry.mood,
        theme = ?analysis.theme,
        "Mood entry saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(AnalyzedEntry {
            entry,
            theme: analysis.theme,
        }),
    ))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = list_mood_entries(&state.db, auth_user.id).await?;
    Ok(Json(entries))
}
