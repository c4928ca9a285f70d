/**
 * API Error Types
 *
 * This module defines the error type shared by all handlers, middleware
 * and stores. Client-facing variants carry the exact message returned to
 * the client; internal variants wrap the underlying store or crypto error
 * and surface as 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All failures a request can end in.
///
/// The first four variants are part of the external contract: their
/// message is sent to the client verbatim. The remaining variants are
/// internal; their detail is logged server-side and only exposed to the
/// client outside of production mode.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input, failed validation (400).
    #[error("{0}")]
    BadRequest(String),

    /// Missing, invalid or expired bearer token (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not the resource owner (403).
    #[error("{0}")]
    Forbidden(String),

    /// Resource absent (404).
    #[error("{0}")]
    NotFound(String),

    /// Store failure (500).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure (500).
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure (500). Verification failures map to
    /// `Unauthorized` instead, at the point of verification.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// 400 for a required body field that is absent or empty.
    pub fn missing_field(name: &str) -> Self {
        Self::BadRequest(format!("Missing '{name}' in request body"))
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether this error carries server-side detail that must not leak
    /// to clients in production mode.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hash(_) | Self::Token(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = ApiError::missing_field("title");
        assert_eq!(error.to_string(), "Missing 'title' in request body");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_classification() {
        assert!(ApiError::Database(sqlx::Error::RowNotFound).is_internal());
        assert!(!ApiError::NotFound("gone".into()).is_internal());
        assert!(!ApiError::Forbidden("no".into()).is_internal());
    }
}
