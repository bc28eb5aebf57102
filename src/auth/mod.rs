//! Authentication and Middleware
//!
//! This module provides the identity layer for the taskdock API: password
//! hashing, bearer-token issue/verify, and the Axum middleware that resolves
//! an identity per request.
//!
//! # Module Structure
//!
//! - [`auth::jwt`](crate::auth::jwt) - Token encoding, decoding, and password hashing
//! - [`auth::middleware`](crate::auth::middleware) - Axum middleware and extractors
//!
//! # Security Features
//!
//! - **Password Hashing**: Argon2id (memory-hard) for secure password storage
//! - **Tokens**: HS256 signed tokens with a fixed configurable expiry
//! - **Claims**: `{ sub, exp, iat }` with the username as identity claim
//!
//! # Configuration
//!
//! The signing secret is supplied via the `JWT_SECRET` environment variable.
//! Startup aborts when it is unset; unsigned tokens are never accepted.

/// Token generation, validation, and password hashing services.
pub mod jwt;
/// Authentication middleware and extractors for protected routes.
pub mod middleware;
