use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// A lost race against a UNIQUE constraint becomes a 409 with `message`.
    pub fn conflict_on_unique(err: sqlx::Error, message: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return AppError::Conflict(message.to_string());
            }
        }
        AppError::Database(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of the emotional-chat proxy. Rendered as a flat `{"error": "..."}`
/// body so the chat widget can show the text as-is.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("Chat service is not configured")]
    NotConfigured,

    #[error("Invalid API key. Please check the chat provider API key configuration.")]
    InvalidCredential,

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Chat provider error: {0}")]
    Upstream(u16),

    #[error("Chat provider returned an unexpected response")]
    MalformedReply,

    #[error("Could not reach chat provider")]
    Transport(#[from] reqwest::Error),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::MissingMessage | ChatError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ChatError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ChatError::InvalidCredential => StatusCode::UNAUTHORIZED,
            ChatError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ChatError::Upstream(_) | ChatError::MalformedReply | ChatError::Transport(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self, "Emotional chat failed");
        } else {
            tracing::warn!(error = %self, "Emotional chat rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_envelope() {
        let response = AppError::Validation("Please tell us how you're feeling first.".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], 422);
        assert_eq!(
            json["error"]["message"],
            "Please tell us how you're feeling first."
        );
    }

    #[tokio::test]
    async fn test_database_error_is_generic() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Internal server error");
    }

    #[derive(Debug)]
    struct UniqueViolation;

    impl std::fmt::Display for UniqueViolation {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("duplicate key value violates unique constraint")
        }
    }

    impl std::error::Error for UniqueViolation {}

    impl sqlx::error::DatabaseError for UniqueViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::UniqueViolation
        }
    }

    #[tokio::test]
    async fn test_unique_violation_is_conflict() {
        let err = sqlx::Error::Database(Box::new(UniqueViolation));
        let app_err = AppError::conflict_on_unique(err, "Email already registered");
        assert!(matches!(&app_err, AppError::Conflict(msg) if msg == "Email already registered"));

        let response = app_err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["error"]["code"], 409);
    }

    #[test]
    fn test_other_database_errors_stay_internal() {
        let app_err = AppError::conflict_on_unique(sqlx::Error::RowNotFound, "taken");
        assert!(matches!(app_err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_chat_error_statuses() {
        assert_eq!(ChatError::InvalidCredential.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ChatError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ChatError::Upstream(503).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ChatError::MissingMessage.status(), StatusCode::BAD_REQUEST);

        let response = ChatError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Rate limit exceeded. Please try again in a moment."
        );
    }
}
