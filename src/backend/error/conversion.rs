/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, and the mapping of lower-layer errors
 * into the HTTP taxonomy.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::TokenRejected;
use crate::backend::error::types::BackendError;
use crate::backend::mutator::MutationError;
use crate::backend::store::StoreError;
use crate::shared::{FieldError, SharedError};

/// Message returned for any rejected token
pub const TOKEN_NOT_VALID: &str = "Token is not valid";

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if let BackendError::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = match &self {
            BackendError::Validation(errors) => serde_json::json!({
                "error": message,
                "status": status.as_u16(),
                "errors": errors,
            }),
            _ => serde_json::json!({
                "error": message,
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<MutationError> for BackendError {
    fn from(err: MutationError) -> Self {
        match err {
            MutationError::AlreadyExists(message) => BackendError::conflict(message),
            MutationError::NotFound(message) => BackendError::not_found(message),
            MutationError::Forbidden(message) => BackendError::forbidden(message),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => BackendError::conflict("User already exists"),
            other => BackendError::internal(other),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { .. } => {
                BackendError::Validation(vec![FieldError::from(err)])
            }
            SharedError::SerializationError { message } => BackendError::internal(message),
        }
    }
}

impl From<TokenRejected> for BackendError {
    /// The rejection reason is logged, the caller only learns the token is
    /// not valid.
    fn from(reason: TokenRejected) -> Self {
        tracing::warn!("Token rejected: {}", reason);
        BackendError::unauthorized(TOKEN_NOT_VALID)
    }
}
