//! Server Module
//!
//! Process-level concerns: environment configuration, shared application
//! state, and server initialization (database pool, migrations, router).

pub mod config;
pub mod init;
pub mod state;
