//! Users Module
//!
//! User persistence, registration-time validation, and the registration
//! handler. Users are created exactly once via registration and never
//! updated or deleted through this surface.

pub mod handlers;
pub mod store;
pub mod validate;
