use crate::auth::jwt::AuthService;
use crate::types::{AppError, Claims};
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Verifies the bearer token on every protected request.
///
/// A missing authorization header is `Unauthenticated` (401); a header that
/// carries a malformed, signature-invalid, or expired token is `Forbidden`
/// (403). On success the decoded [`Claims`] are inserted into the request
/// extensions for downstream handlers — identity is never read from the
/// request body.
pub async fn require_auth(
    auth_service: Arc<AuthService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthenticated("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Forbidden("Malformed authorization header".to_string()))?;

    let claims = auth_service.verify_token(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

// Extractor for claims
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Resolved identity of the authenticated caller.
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthenticated("Missing authentication".to_string()))
    }
}
