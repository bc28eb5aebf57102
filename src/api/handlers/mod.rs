//! API request handlers.
//!
//! This module contains all HTTP request handlers organized by functionality.

/// Authentication handlers (login, register).
pub mod auth;
/// Task CRUD handlers.
pub mod tasks;
