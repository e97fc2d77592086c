/**
 * Backend Error Types
 *
 * # Error Categories
 *
 * - `Unauthorized` - token missing or rejected (401)
 * - `Forbidden` - authenticated but not allowed to touch the target (403)
 * - `NotFound` - aggregate or nested entry absent (404)
 * - `Conflict` - duplicate registration email or duplicate like (409)
 * - `Validation` - malformed input with field-level messages (400)
 * - `BadRequest` - request could not be read at all (400)
 * - `InvalidCredentials` - login failed, same error whatever the cause (400)
 * - `Internal` - anything unexpected; detail is logged, never returned (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::FieldError;

/// Message returned for every internal failure
pub const SERVER_ERROR: &str = "Server error";

/// Message returned for every failed login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use devlink::backend::error::BackendError;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Field-level validation failure
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unknown email or wrong password, deliberately indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Unexpected failure. The string is for the logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an internal error from any displayable cause
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }

    /// Single-field validation failure
    pub fn validation(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(param, msg)])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::BadRequest(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message shown to the caller
    pub fn message(&self) -> String {
        match self {
            Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::BadRequest(message) => message.clone(),
            Self::Validation(_) => "Validation failed".to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS.to_string(),
            Self::Internal(_) => SERVER_ERROR.to_string(),
        }
    }
}
