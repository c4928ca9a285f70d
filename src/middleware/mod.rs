//! Request Middleware
//!
//! Bearer-token authentication for protected routes.

pub mod auth;
