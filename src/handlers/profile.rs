use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::user::{UpdateProfileRequest, User, UserProfile};
use crate::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<UserProfile>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(auth_user.id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(Json(user.into()))
}

/// Replaces every editable field; omitted or blank fields become NULL.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<UserProfile>> {
    let body = body.normalized();
    body.validate()?;

    if let Some(username) = &body.username {
        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = $1 AND id <> $2",
        )
        .bind(username)
        .bind(auth_user.id)
        .fetch_one(&state.db)
        .await?;
        if taken > 0 {
            return Err(AppError::Conflict("Username already taken".into()));
        }
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users SET
            username = $2,
            full_name = $3,
            bio = $4,
            phone = $5,
            date_of_birth = $6,
            location = $7,
            website = $8,
            avatar_url = $9,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(auth_user.id)
    .bind(&body.username)
    .bind(&body.full_name)
    .bind(&body.bio)
    .bind(&body.phone)
    .bind(body.date_of_birth)
    .bind(&body.location)
    .bind(&body.website)
    .bind(&body.avatar_url)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| AppError::conflict_on_unique(e, "Username already taken"))?
    .ok_or(AppError::NotFound("Profile not found".into()))?;

    tracing::info!(user_id = %auth_user.id, "Profile updated");
    Ok(Json(user.into()))
}
