//! Route Configuration Module
//!
//! Assembles the public routes (registration, login) and the protected
//! pattern routes behind the authentication middleware.

pub mod router;

pub use router::create_router;
