use std::collections::HashMap;

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::services::quiz::{
    QuizError, QuizProfile, QuizQuestion, QuizStep, QuizWizard, DEFAULT_PROFILE_NAME, QUESTIONS,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizAction {
    Next,
    Back,
}

/// One wizard move. The client holds the answers; the server re-derives the
/// position from them on every call.
#[derive(Debug, Deserialize)]
pub struct QuizStepRequest {
    pub step: usize,
    pub action: QuizAction,
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct QuizStepView {
    /// Zero-based question index; absent once the quiz is complete.
    pub step: Option<usize>,
    pub progress: f64,
    pub question: Option<&'static QuizQuestion>,
    pub can_advance: bool,
    pub profile: Option<QuizProfile>,
}

impl From<&QuizWizard> for QuizStepView {
    fn from(wizard: &QuizWizard) -> Self {
        let (step, profile) = match wizard.step() {
            QuizStep::AnsweringQuestion(index) => (Some(*index), None),
            QuizStep::Complete(profile) => (None, Some(profile.clone())),
        };
        Self {
            step,
            progress: wizard.progress(),
            question: wizard.current_question(),
            can_advance: wizard.is_current_step_valid(),
            profile,
        }
    }
}

fn quiz_error(err: QuizError) -> AppError {
    AppError::Validation(err.to_string())
}

async fn profile_name(db: &PgPool, user_id: Uuid) -> AppResult<String> {
    let full_name = sqlx::query_scalar::<_, Option<String>>("SELECT full_name FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .flatten()
        .filter(|n| !n.trim().is_empty());
    Ok(full_name.unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()))
}

pub async fn list_questions() -> Json<&'static [QuizQuestion]> {
    Json(&QUESTIONS[..])
}

pub async fn step(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<QuizStepRequest>,
) -> AppResult<Json<QuizStepView>> {
    let name = match body.action {
        QuizAction::Next => profile_name(&state.db, auth_user.id).await?,
        // going back never completes the quiz
        QuizAction::Back => DEFAULT_PROFILE_NAME.to_string(),
    };
    let mut wizard = QuizWizard::resume(&name, &body.answers, body.step).map_err(quiz_error)?;

    match body.action {
        QuizAction::Next => {
            wizard.advance().map_err(quiz_error)?;
        }
        QuizAction::Back => wizard.back(),
    }

    Ok(Json(QuizStepView::from(&wizard)))
}

pub async fn submit_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<QuizSubmission>,
) -> AppResult<Json<QuizProfile>> {
    let name = profile_name(&state.db, auth_user.id).await?;
    let profile = QuizWizard::run(&name, &body.answers).map_err(quiz_error)?;

    tracing::info!(
        user_id = %auth_user.id,
        recent_feeling = %profile.recent_feeling,
        "Quiz profile derived"
    );
    Ok(Json(profile))
}
