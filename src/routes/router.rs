/**
 * Router Configuration
 *
 * Wires verbs and paths to handlers. Pattern routes sit behind the
 * authentication middleware; registration and login are public by
 * necessity. CORS is restricted to the configured client origin and
 * every request is traced.
 */

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::handlers::login;
use crate::middleware::auth::auth_middleware;
use crate::patterns::handlers::{
    create_pattern, delete_pattern, get_pattern, list_patterns_by_user, patch_pattern,
};
use crate::server::config::AppConfig;
use crate::server::state::AppState;
use crate::users::handlers::register;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    // Error responses need to know the mode; recorded once here so it is
    // always whatever config the router was built with.
    crate::error::conversion::set_production_mode(state.config.production);

    let protected = Router::new()
        .route("/api/patterns", post(create_pattern))
        .route(
            "/api/patterns/{pattern_id}",
            get(get_pattern)
                .patch(patch_pattern)
                .delete(delete_pattern),
        )
        .route("/api/patterns/users/{user_id}", get(list_patterns_by_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/api/users", post(register))
        .route("/api/auth/login", post(login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

/// CORS restricted to the configured client origin.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    match config.client_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(
                "CLIENT_ORIGIN '{}' is not a valid header value, cross-origin requests disabled",
                config.client_origin
            );
            CorsLayer::new()
        }
    }
}
