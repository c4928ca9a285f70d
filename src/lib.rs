//! Groovebox Backend
//!
//! REST backend for the Groovebox pattern sequencer. It registers and
//! authenticates users and lets an authenticated user manage "pattern"
//! resources (JSON blobs of tempo plus note events) scoped to their own
//! account.
//!
//! # Architecture
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing and JWT token handling, login handler
//! - **`users`** - User store, registration validation, register handler
//! - **`patterns`** - Pattern store, ownership guard, output sanitization,
//!   CRUD handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - API error types and HTTP response conversion
//!
//! Every request flows router -> auth middleware -> (ownership guard for
//! single-pattern routes) -> handler -> store, with free-text fields
//! HTML-escaped on the way out.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod patterns;
pub mod routes;
pub mod server;
pub mod users;
