/**
 * Pattern CRUD Handlers
 *
 * All routes here run behind the authentication middleware; handlers
 * addressing a single pattern additionally go through the ownership
 * guard, which hands them the loaded row.
 *
 * Every serialized pattern passes through the sanitizer on the way out;
 * stored titles are never mutated.
 */

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::patterns::guard::load_owned_pattern;
use crate::patterns::sanitize::sanitize_title;
use crate::patterns::store::{
    get_patterns_by_user, insert_pattern, remove_pattern, update_pattern, Pattern,
};
use crate::server::state::AppState;

/// A pattern as serialized to clients, title HTML-escaped.
#[derive(Debug, Serialize)]
pub struct PatternResponse {
    pub id: i32,
    pub title: String,
    pub user_id: i32,
    pub pattern_data: Value,
}

impl From<Pattern> for PatternResponse {
    fn from(pattern: Pattern) -> Self {
        Self {
            id: pattern.id,
            title: sanitize_title(&pattern.title),
            user_id: pattern.user_id,
            pattern_data: pattern.pattern_data,
        }
    }
}

/// Create-pattern request body.
#[derive(Debug, Deserialize)]
pub struct CreatePatternRequest {
    pub title: Option<String>,
    pub pattern_data: Option<Value>,
}

/// Update-pattern request body; both fields optional, at least one
/// required.
#[derive(Debug, Deserialize)]
pub struct UpdatePatternRequest {
    pub title: Option<String>,
    pub pattern_data: Option<Value>,
}

/// A `pattern_data` value counts as provided only when truthy: JSON
/// `null`, `false`, `0` and `""` are all treated as absent, matching
/// what the clients send to clear the field.
fn provided(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        _ => true,
    })
}

/// POST /api/patterns
pub async fn create_pattern(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<CreatePatternRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<PatternResponse>)> {
    // Required fields, checked in contract order.
    let title = body
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .ok_or_else(|| ApiError::missing_field("title"))?;
    let pattern_data =
        provided(body.pattern_data.as_ref()).ok_or_else(|| ApiError::missing_field("pattern_data"))?;

    let pattern = insert_pattern(&state.db, title, pattern_data, user.id).await?;

    tracing::info!("user {} created pattern {}", user.id, pattern.id);

    let location = format!("/api/patterns/{}", pattern.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PatternResponse::from(pattern)),
    ))
}

/// GET /api/patterns/{pattern_id}
pub async fn get_pattern(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(pattern_id): Path<i32>,
) -> ApiResult<Json<PatternResponse>> {
    let pattern = load_owned_pattern(&state.db, pattern_id, &user).await?;
    Ok(Json(PatternResponse::from(pattern)))
}

/// PATCH /api/patterns/{pattern_id}
pub async fn patch_pattern(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(pattern_id): Path<i32>,
    Json(body): Json<UpdatePatternRequest>,
) -> ApiResult<StatusCode> {
    let pattern = load_owned_pattern(&state.db, pattern_id, &user).await?;

    let title = body.title.as_deref().filter(|title| !title.is_empty());
    let pattern_data = provided(body.pattern_data.as_ref());

    if title.is_none() && pattern_data.is_none() {
        return Err(ApiError::BadRequest(
            "Request body must contain either 'title' or 'pattern_data'".to_string(),
        ));
    }

    update_pattern(&state.db, pattern.id, title, pattern_data).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/patterns/{pattern_id}
pub async fn delete_pattern(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(pattern_id): Path<i32>,
) -> ApiResult<StatusCode> {
    let pattern = load_owned_pattern(&state.db, pattern_id, &user).await?;

    remove_pattern(&state.db, pattern.id).await?;

    tracing::info!("user {} deleted pattern {}", user.id, pattern.id);

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/patterns/users/{user_id}
///
/// No pattern is targeted, so there is nothing for the ownership guard
/// to load; the path's user id is compared to the caller directly.
pub async fn list_patterns_by_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<PatternResponse>>> {
    if user_id != user.id {
        tracing::warn!("user {} denied pattern listing for user {}", user.id, user_id);
        return Err(ApiError::Forbidden("Unauthorized request".to_string()));
    }

    let patterns = get_patterns_by_user(&state.db, user.id).await?;

    Ok(Json(patterns.into_iter().map(PatternResponse::from).collect()))
}
