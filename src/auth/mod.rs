//! Authentication Module
//!
//! Credential and token handling: bcrypt password hashing, signed
//! time-limited JWT bearer tokens, and the login handler.

pub mod credentials;
pub mod handlers;
pub mod tokens;
