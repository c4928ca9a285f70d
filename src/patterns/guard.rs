/**
 * Ownership Guard
 *
 * Every handler addressing a pattern by id goes through this guard, and
 * only through this guard; ownership is never re-checked ad hoc inside
 * handlers.
 *
 * Existence is checked before ownership, so a non-existent id always
 * reports 404 and never leaks whether some other user owns it.
 */

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthenticatedUser;
use crate::patterns::store::{get_pattern_by_id, Pattern};

/// Load a pattern and verify the caller owns it.
///
/// Returns the loaded pattern so the handler needs no second fetch.
/// Fails 404 "Pattern doesn't exist" when absent and 403 "Unauthorized
/// request" when owned by someone else.
pub async fn load_owned_pattern(
    pool: &PgPool,
    pattern_id: i32,
    caller: &AuthenticatedUser,
) -> ApiResult<Pattern> {
    let pattern = get_pattern_by_id(pool, pattern_id).await?;
    check_ownership(pattern, caller.id)
}

/// The access decision itself, separated from the fetch. Existence is
/// decided before ownership.
fn check_ownership(pattern: Option<Pattern>, caller_id: i32) -> ApiResult<Pattern> {
    let pattern =
        pattern.ok_or_else(|| ApiError::NotFound("Pattern doesn't exist".to_string()))?;

    if pattern.user_id != caller_id {
        tracing::warn!(
            "user {} denied access to pattern {} owned by {}",
            caller_id,
            pattern.id,
            pattern.user_id
        );
        return Err(ApiError::Forbidden("Unauthorized request".to_string()));
    }

    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn owned_by(user_id: i32) -> Option<Pattern> {
        Some(Pattern {
            id: 7,
            title: "pattern one".to_string(),
            pattern_data: serde_json::json!({ "bpm": 130 }),
            user_id,
        })
    }

    #[test]
    fn test_owner_gets_pattern() {
        let pattern = check_ownership(owned_by(1), 1).unwrap();
        assert_eq!(pattern.id, 7);
    }

    #[test]
    fn test_non_owner_forbidden() {
        let err = check_ownership(owned_by(1), 2).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Unauthorized request");
    }

    #[test]
    fn test_absent_pattern_not_found() {
        let err = check_ownership(None, 1).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Pattern doesn't exist");
    }

    // An id that doesn't exist reports 404 for every caller; absence is
    // never converted into an ownership denial.
    #[test]
    fn test_absence_decided_before_ownership() {
        for caller_id in [1, 2, 999] {
            let err = check_ownership(None, caller_id).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }
}
