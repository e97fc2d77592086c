//! Request body validation
//!
//! [`ValidJson`] deserialises a JSON body and runs its `validator` rules
//! before the handler sees it, so handlers never touch an invalid payload.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::backend::error::BackendError;
use crate::shared::FieldError;

/// JSON body that passed validation
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                BackendError::bad_request(rejection.body_text())
            })?;

        value.validate()?;
        Ok(ValidJson(value))
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        BackendError::Validation(field_errors(&errors))
    }
}

/// Flatten `validator` output into `{param, msg}` pairs, sorted by field.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, issues)| {
            issues.iter().map(move |issue| {
                let msg = issue
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.to_string(), msg)
            })
        })
        .collect();
    fields.sort_by(|a, b| a.param.cmp(&b.param));
    fields
}
