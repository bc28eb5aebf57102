//! # taskdock
//!
//! A token-authenticated personal task API with flat JSON document
//! persistence.
//!
//! ## Overview
//!
//! taskdock can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `taskdock-server` binary
//! 2. **As a library** - Import the stores and router into your own project
//!
//! Authenticated users create, list, retrieve, update, and delete personal
//! task records. Identity is carried by a signed bearer token; every task
//! operation is scoped to the owner resolved from that token.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use taskdock::{api, auth::jwt::AuthService, store::{TaskStore, UserStore}, AppState};
//! use std::sync::Arc;
//!
//! let auth_service = Arc::new(AuthService::new(secret, 3600));
//! let state = AppState {
//!     config: Arc::new(config),
//!     users: Arc::new(UserStore::new("data/users.json")),
//!     tasks: Arc::new(TaskStore::new("data/tasks.json")),
//!     auth_service: auth_service.clone(),
//! };
//! let app = axum::Router::new()
//!     .nest("/api", api::routes::create_router(auth_service))
//!     .with_state(state);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - Token issue/verify, password hashing, and middleware
//! - [`store`] - JSON-document persistence (users, tasks)
//! - [`types`] - Common types and error handling
//! - [`utils`] - Configuration
//!
//! ## Persistence model
//!
//! Users and tasks live in two independent JSON-array files, each rewritten
//! in full on every mutation. A per-document mutex serializes every
//! read-modify-write cycle and writes go through a temp file plus atomic
//! rename, so concurrent writers never lose updates and readers never see a
//! partial document.

/// HTTP API handlers and routes.
pub mod api;
/// Authentication, token handling, and middleware.
pub mod auth;
/// Flat-document persistence for users and tasks.
pub mod store;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use store::{TaskStore, UserStore};
pub use types::{AppError, Result, Task, User};
pub use utils::config::Config;

use crate::auth::jwt::AuthService;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Persisted credential collection
    pub users: Arc<UserStore>,
    /// Persisted, ownership-scoped task collection
    pub tasks: Arc<TaskStore>,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
}
