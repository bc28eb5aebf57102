use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Domain Types =============

/// A registered account. Created by registration only; never updated or
/// deleted while in scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique, case-sensitive login name
    pub username: String,
    /// Argon2id PHC-formatted password hash
    pub password_hash: String,
}

/// A task record owned by exactly one user.
///
/// `id` and `owner` are assigned by the store at creation time and never
/// change afterwards. Any additional caller-supplied fields ride along in
/// `extra` and are preserved verbatim across updates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Store-assigned UUID, immutable
    pub id: String,
    /// Username of the creator, immutable
    pub owner: String,
    /// Short task title
    #[serde(default)]
    pub title: String,
    /// Free-form task description
    #[serde(default)]
    pub description: String,
    /// Additional caller-supplied fields, kept as-is
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============= API Request/Response Types =============

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: i64,
}

/// Update payload. Only `title` and `description` are mutable; any other
/// keys in the request body (including `id` and `owner`) are dropped during
/// deserialization.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============= Authentication Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity claim: the authenticated username
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Unauthenticated(msg) => (axum::http::StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (axum::http::StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg),
            AppError::Storage(msg) => {
                // Operator detail goes to the log, never to the caller.
                tracing::error!(error = %msg, "storage failure");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
