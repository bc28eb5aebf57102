//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for taskdock, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/auth`)
//! - `POST /api/auth/register` - Register new user (201)
//! - `POST /api/auth/login` - Login and receive a bearer token (200)
//!
//! ## Tasks (`/api/tasks`)
//! - `GET /api/tasks` - List the caller's tasks
//! - `POST /api/tasks` - Create a task (201)
//! - `GET /api/tasks/{id}` - Get one owned task
//! - `PUT /api/tasks/{id}` - Update title/description of an owned task
//! - `DELETE /api/tasks/{id}` - Delete an owned task (idempotent)
//!
//! ## Health (`/api/health`)
//! - `GET /api/health` - Health check endpoint
//!
//! # Authentication
//!
//! Task endpoints require a valid bearer token in the `Authorization` header:
//! ```text
//! Authorization: Bearer <token>
//! ```
//! A missing header yields 401; a malformed, signature-invalid, or expired
//! token yields 403.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

use utoipa::OpenApi;

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

/// OpenAPI document for the task API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::tasks::list_tasks,
        handlers::tasks::get_task,
        handlers::tasks::create_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "tasks", description = "Ownership-scoped task CRUD")
    )
)]
pub struct ApiDoc;
