/**
 * Authentication Middleware
 *
 * Protects every pattern route. Per request the state machine is two
 * states, Unauthenticated -> Authenticated:
 *
 * 1. Extract the bearer token from the Authorization header
 * 2. Verify signature and expiry
 * 3. Load the token's subject from the users table
 * 4. Attach the identity to request extensions
 *
 * Handlers learn who is calling only through the `AuthUser` extractor;
 * there is no other path to the caller's identity.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::store::get_user_by_user_name;

/// Identity resolved from a verified bearer token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub user_name: String,
    pub email: String,
}

fn bearer_token(header: Option<&str>) -> Result<&str, ApiError> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("request without bearer token");
            ApiError::Unauthorized("Missing bearer token".to_string())
        })
}

/// Verify the request's bearer token and attach the caller's identity.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)?;
    let claims = verify_token(token, &state.config)?;

    // The subject must still exist; a deleted or renamed account does not
    // get to ride out its token's lifetime.
    let user = get_user_by_user_name(&state.db, &claims.sub)
        .await?
        .ok_or_else(|| {
            tracing::warn!("token subject '{}' not found", claims.sub);
            ApiError::Unauthorized("Unauthorized request".to_string())
        })?;

    request.extensions_mut().insert(AuthenticatedUser {
        id: user.id,
        user_name: user.user_name,
        email: user.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized request".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header_rejected() {
        let err = bearer_token(None).unwrap_err();
        assert_eq!(err.to_string(), "Missing bearer token");
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        let err = bearer_token(Some("Basic dXNlcjpwYXNz")).unwrap_err();
        assert_eq!(err.to_string(), "Missing bearer token");
    }
}
