/**
 * Server Initialization
 *
 * Connects the database pool, runs embedded migrations, and assembles
 * the router around the shared application state.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Connect to PostgreSQL and bring the schema up to date.
///
/// Migration failures are logged but do not abort startup; the schema may
/// already be current from a previous deploy.
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("database migrations applied"),
        Err(err) => {
            tracing::warn!("migrations did not run cleanly: {err}");
        }
    }

    Ok(pool)
}

/// Build the application: pool, state, router.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    let pool = connect_database(&config).await?;

    let state = AppState {
        db: pool,
        config: Arc::new(config),
    };

    Ok(create_router(state))
}
