use crate::{
    types::{AppError, LoginRequest, RegisterRequest, Result, TokenResponse, User},
    AppState,
};
use axum::{extract::State, http::StatusCode, Json};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully"),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username already exists")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    // Validate input
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Username and password are required".to_string(),
        ));
    }

    // Hash password
    let password_hash = state.auth_service.hash_password(&payload.password)?;

    // Persist; the store enforces username uniqueness atomically
    state
        .users
        .append(User {
            username: payload.username.clone(),
            password_hash,
        })
        .await?;

    tracing::info!(username = %payload.username, "user registered");

    Ok((StatusCode::CREATED, Json(serde_json::json!({"created": true}))))
}

/// Login with username and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    // Get user
    let user = state
        .users
        .find_by_username(&payload.username)
        .await?
        .ok_or_else(|| AppError::Unauthenticated("Invalid credentials".to_string()))?;

    // Verify password
    if !state
        .auth_service
        .verify_password(&payload.password, &user.password_hash)?
    {
        return Err(AppError::Unauthenticated("Invalid credentials".to_string()));
    }

    // Issue token carrying the identity claim
    let tokens = state.auth_service.issue_token(&user.username)?;

    Ok(Json(tokens))
}
