/**
 * Registration Handler
 *
 * POST /api/users. The only unauthenticated write surface.
 *
 * The flow is a linear sequence of awaited steps, each short-circuiting
 * on first failure: required fields (fixed order) -> password rules ->
 * email shape -> username uniqueness -> email uniqueness -> hash ->
 * insert. The uniqueness checks and the insert are separate statements;
 * the race between concurrent registrations is closed by the schema's
 * unique constraints, with a violation at insert mapped back to the same
 * duplicate message the check would have produced.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::auth::credentials::hash_password;
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::users::store::{
    get_user_by_email, get_user_by_user_name, insert_user, is_unique_violation, User,
};
use crate::users::validate::{validate_email, validate_password};

/// Registration request body. Fields are optional so absence is reported
/// with the contract's message instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// A user as serialized to clients. Never carries a password field.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub user_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
        }
    }
}

fn require_field<'a>(value: &'a Option<String>, name: &str) -> ApiResult<&'a str> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing_field(name))
}

/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    // Required fields, checked in contract order.
    let user_name = require_field(&body.user_name, "user_name")?;
    let email = require_field(&body.email, "email")?;
    let password = require_field(&body.password, "password")?;

    if let Some(message) = validate_password(password) {
        return Err(ApiError::BadRequest(message.to_string()));
    }
    if let Some(message) = validate_email(email) {
        return Err(ApiError::BadRequest(message.to_string()));
    }

    if get_user_by_user_name(&state.db, user_name).await?.is_some() {
        return Err(ApiError::BadRequest("Username already taken".to_string()));
    }
    if get_user_by_email(&state.db, email).await?.is_some() {
        return Err(ApiError::BadRequest(
            "Email is already being used".to_string(),
        ));
    }

    let password_hash = hash_password(password)?;

    let user = match insert_user(&state.db, user_name, email, &password_hash).await {
        Ok(user) => user,
        // A concurrent registration can win between the checks above and
        // this insert; report it as the same duplicate error.
        Err(err) if is_unique_violation(&err, "users_user_name_key") => {
            return Err(ApiError::BadRequest("Username already taken".to_string()));
        }
        Err(err) if is_unique_violation(&err, "users_email_key") => {
            return Err(ApiError::BadRequest(
                "Email is already being used".to_string(),
            ));
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("registered user '{}' (id {})", user.user_name, user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
