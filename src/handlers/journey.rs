use axum::{Extension, Json};

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::services::journey::{JourneyRequest, JourneyResponse};

pub async fn check_in(
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<JourneyRequest>,
) -> AppResult<Json<JourneyResponse>> {
    let check_in = body.into_check_in().map_err(AppError::Validation)?;
    tracing::info!(
        user_id = %auth_user.id,
        mood = ?check_in.mood,
        day_quality = check_in.day_quality,
        "Journey check-in received"
    );
    Ok(Json(check_in.into()))
}
