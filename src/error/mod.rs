//! API error types and HTTP response conversion.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse`
//! implementation in `conversion` turns a failure into a JSON body of the
//! form `{"error": "..."}` with the matching status code.

pub mod conversion;
pub mod types;

pub use types::ApiError;

/// Convenience alias for handler and store results.
pub type ApiResult<T> = Result<T, ApiError>;
