/**
 * Server Configuration
 *
 * Loads process configuration from the environment once at startup.
 * The resulting `AppConfig` is the only carrier of the signing secret,
 * token expiry, store connection string and allowed client origin; it is
 * passed by reference (via `AppState`) into every component that needs
 * it, never read from a global afterwards.
 *
 * # Environment variables
 *
 * - `PORT` - listening port (default 8000)
 * - `APP_ENV` - runtime mode, `production` or `development` (default
 *   `development`); affects error-detail exposure
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `JWT_SECRET` - token signing secret
 * - `JWT_EXPIRY_SECS` - token lifetime in seconds (default 20; tokens
 *   are short-lived by design, production deployments set this higher)
 * - `CLIENT_ORIGIN` - allowed cross-origin client address
 */

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port.
    pub port: u16,
    /// True when `APP_ENV=production`; suppresses internal error detail
    /// in responses.
    pub production: bool,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Token signing secret.
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    pub jwt_expiry_secs: u64,
    /// Allowed cross-origin client address.
    pub client_origin: String,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// Missing variables fall back to development defaults; each fallback
    /// is logged so a misconfigured production deployment is visible.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8000);

        let production = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!("DATABASE_URL not set, using local development default");
            "postgres://postgres@localhost/groovebox".to_string()
        });

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using insecure development default");
            "change-this-secret".to_string()
        });

        let jwt_expiry_secs = std::env::var("JWT_EXPIRY_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(20);

        let client_origin = std::env::var("CLIENT_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            port,
            production,
            database_url,
            jwt_secret,
            jwt_expiry_secs,
            client_origin,
        }
    }
}

/// Fixture used by unit tests across the crate.
#[cfg(test)]
pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        production: false,
        database_url: "postgres://postgres@localhost/groovebox_test".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiry_secs: 300,
        client_origin: "http://localhost:3000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_development() {
        let config = test_config();
        assert!(!config.production);
        assert_eq!(config.jwt_expiry_secs, 300);
    }
}
