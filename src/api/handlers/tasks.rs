//! Task management handlers.
//!
//! Every handler takes the identity resolved by the auth middleware through
//! the [`AuthUser`] extractor and passes it to the store; identity supplied
//! in a request body is never trusted.

use crate::{
    auth::middleware::AuthUser,
    types::{AppError, Result, Task, UpdateTaskRequest},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// List all tasks owned by the authenticated user.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks owned by the caller, in insertion order", body = Vec<Task>),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Invalid or expired token")
    ),
    tag = "tasks",
    security(("bearer" = []))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Task>>> {
    let tasks = state.tasks.list(&claims.sub).await?;
    Ok(Json(tasks))
}

/// Get a single owned task.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 404, description = "Task absent or owned by someone else"),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Invalid or expired token")
    ),
    tag = "tasks",
    security(("bearer" = []))
)]
pub async fn get_task(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Task>> {
    let task = state.tasks.get(&claims.sub, &id).await?;
    Ok(Json(task))
}

/// Create a task for the authenticated user.
///
/// The body is an open JSON object; `title` and `description` are lifted
/// into the task proper and any other fields are carried along. The store
/// assigns `id` and `owner`, discarding caller-supplied values for both.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = Object,
    responses(
        (status = 201, description = "Created task", body = Task),
        (status = 400, description = "Payload is not a JSON object"),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Invalid or expired token")
    ),
    tag = "tasks",
    security(("bearer" = []))
)]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Task>)> {
    let serde_json::Value::Object(fields) = payload else {
        return Err(AppError::InvalidInput(
            "Task payload must be a JSON object".to_string(),
        ));
    };

    let task = state.tasks.create(&claims.sub, fields).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update the mutable fields of an owned task.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 400, description = "Payload is not an object or has non-string fields"),
        (status = 404, description = "Task absent or owned by someone else"),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Invalid or expired token")
    ),
    tag = "tasks",
    security(("bearer" = []))
)]
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<Task>> {
    // Deserialize by hand so a type-malformed body yields the same
    // `{"error": …}` shape as every other failure.
    let payload: UpdateTaskRequest = serde_json::from_value(payload)
        .map_err(|e| AppError::InvalidInput(format!("Invalid update payload: {}", e)))?;

    let task = state.tasks.update(&claims.sub, &id, payload).await?;
    Ok(Json(task))
}

/// Delete an owned task.
///
/// Idempotent: deleting an absent or already-deleted id still returns 200.
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(
        ("id" = String, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task removed (or was already absent)"),
        (status = 401, description = "Missing credentials"),
        (status = 403, description = "Invalid or expired token")
    ),
    tag = "tasks",
    security(("bearer" = []))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    state.tasks.delete(&claims.sub, &id).await?;
    Ok(Json(serde_json::json!({"deleted": true})))
}
