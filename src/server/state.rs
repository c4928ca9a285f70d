/**
 * Application State
 *
 * Central state container handed to the router. Holds the database pool
 * and the configuration object, both read-only after startup; there is no
 * other shared mutable state in the process.
 *
 * `FromRef` implementations let handlers extract just the part of the
 * state they need.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::server::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub db: PgPool,
    /// Process configuration, built once at startup.
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
