use crate::auth::jwt::AuthService;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn create_router(auth_service: Arc<AuthService>) -> Router<AppState> {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route("/auth/register", post(crate::api::handlers::auth::register))
        .route("/auth/login", post(crate::api::handlers::auth::login))
        .route("/health", get(health));

    let protected_routes = Router::new()
        // Protected routes (bearer token required)
        .route(
            "/tasks",
            get(crate::api::handlers::tasks::list_tasks)
                .post(crate::api::handlers::tasks::create_task),
        )
        // Update and delete are registered flat and independently
        .route(
            "/tasks/{id}",
            get(crate::api::handlers::tasks::get_task)
                .put(crate::api::handlers::tasks::update_task)
                .delete(crate::api::handlers::tasks::delete_task),
        )
        .layer(middleware::from_fn(move |req, next| {
            crate::auth::middleware::require_auth(auth_service.clone(), req, next)
        }));

    public_routes.merge(protected_routes)
}

async fn health() -> &'static str {
    "OK"
}
