/**
 * Error Response Conversion
 *
 * Implements `IntoResponse` for `ApiError` so handlers can return it
 * directly. Responses are JSON of the form `{"error": "..."}`.
 *
 * Internal errors (store, crypto) are always logged with full detail
 * server-side; the client-visible message is replaced with a generic one
 * when running in production mode. The mode is recorded once from
 * `AppConfig` when the router is built.
 */

use std::sync::OnceLock;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

static PRODUCTION_MODE: OnceLock<bool> = OnceLock::new();

/// Record the runtime mode from `AppConfig`. The first call wins; the
/// mode cannot change for the lifetime of the process.
pub fn set_production_mode(production: bool) {
    let _ = PRODUCTION_MODE.set(production);
}

/// Whether internal error detail may be included in responses.
fn expose_internal_detail() -> bool {
    !PRODUCTION_MODE.get().copied().unwrap_or(false)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if self.is_internal() {
            tracing::error!("internal error: {self}");
            if expose_internal_detail() {
                self.to_string()
            } else {
                "server error".to_string()
            }
        } else {
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_body() {
        let response = ApiError::NotFound("Pattern doesn't exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Pattern doesn't exist" }));
    }

    #[tokio::test]
    async fn test_forbidden_body() {
        let response = ApiError::Forbidden("Unauthorized request".into()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Unauthorized request");
    }

    #[tokio::test]
    async fn test_internal_error_is_500() {
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }

    // A single sequential test: the mode is process-wide and sticky, so
    // the unset, set and re-set cases have to be asserted in order.
    #[tokio::test]
    async fn test_production_mode_gates_internal_detail() {
        // Unset mode behaves as development: detail is exposed.
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("database error"));

        set_production_mode(true);
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "server error");

        // Client-facing errors keep their message in production mode.
        let response = ApiError::NotFound("Pattern doesn't exist".into()).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "Pattern doesn't exist");

        // First write wins; the mode cannot be flipped back.
        set_production_mode(false);
        let response = ApiError::Database(sqlx::Error::RowNotFound).into_response();
        let body = body_json(response).await;
        assert_eq!(body["error"], "server error");
    }
}
