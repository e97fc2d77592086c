//! Shared Error Types
//!
//! This module defines error types for the document models shared between
//! the storage layer and the HTTP layer. These errors represent invalid
//! model state detected before anything is persisted.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field failed a model-level rule
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use devlink::shared::error::SharedError;
//!
//! let error = SharedError::validation("to", "End date must not precede start date");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared error types raised by the document models
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// A single field-level validation message as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field
    pub param: String,
    /// Human-readable message
    pub msg: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
        }
    }
}

impl From<SharedError> for FieldError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { field, message } => Self::new(field, message),
            SharedError::SerializationError { message } => Self::new("body", message),
        }
    }
}
