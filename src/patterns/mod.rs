//! Patterns Module
//!
//! The domain resource: a sequenced set of musical note events plus
//! tempo, stored as an opaque JSON value. Persistence, the ownership
//! guard, output sanitization, and the CRUD handlers live here.

pub mod guard;
pub mod handlers;
pub mod sanitize;
pub mod store;
