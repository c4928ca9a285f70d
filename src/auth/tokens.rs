/**
 * Bearer Tokens
 *
 * JWT creation and verification (HS256). A token binds to exactly one
 * user: subject is the username, with the numeric user id carried as an
 * extra claim. Tokens are short-lived by design and there is no refresh
 * mechanism; expiry forces re-authentication.
 *
 * The signing secret and expiry come from `AppConfig`, loaded once at
 * startup and passed in explicitly.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::server::config::AppConfig;
use crate::users::store::User;

/// JWT claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder.
    pub sub: String,
    /// Store-assigned user id.
    pub user_id: i32,
    /// Issued at (Unix timestamp).
    pub iat: u64,
    /// Expiration (Unix timestamp).
    pub exp: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Issue a signed token for a user.
pub fn create_token(
    user: &User,
    config: &AppConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user.user_name.clone(),
        user_id: user.id,
        iat: now,
        exp: now + config.jwt_expiry_secs,
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token's signature and expiry and return its claims.
///
/// Any failure (bad signature, expired, malformed) maps to a 401; the
/// underlying reason is logged but not exposed to the client.
pub fn verify_token(token: &str, config: &AppConfig) -> Result<Claims, ApiError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    // No leeway: configured expiries are in the tens of seconds.
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|err| {
            tracing::warn!("token rejected: {err}");
            ApiError::Unauthorized("Unauthorized request".to_string())
        })
}
