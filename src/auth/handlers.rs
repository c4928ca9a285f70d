/**
 * Login Handler
 *
 * POST /api/auth/login. Verifies credentials and issues a bearer token.
 *
 * Unknown username and wrong password produce the same error so the
 * endpoint cannot be used to enumerate accounts.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::credentials::verify_password;
use crate::auth::tokens::create_token;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::users::store::get_user_by_user_name;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

/// Authenticate a user and return a fresh token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user_name = body
        .user_name
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing_field("user_name"))?;
    let password = body
        .password
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing_field("password"))?;

    let user = get_user_by_user_name(&state.db, user_name)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login attempt for unknown user");
            ApiError::BadRequest("Incorrect user_name or password".to_string())
        })?;

    if !verify_password(password, &user.password)? {
        tracing::warn!("failed login for user '{}'", user.user_name);
        return Err(ApiError::BadRequest(
            "Incorrect user_name or password".to_string(),
        ));
    }

    let auth_token = create_token(&user, &state.config)?;

    tracing::info!("user '{}' logged in", user.user_name);

    Ok(Json(LoginResponse { auth_token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_field_name() {
        let response = LoginResponse {
            auth_token: "abc.def.ghi".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "authToken": "abc.def.ghi" }));
    }
}
