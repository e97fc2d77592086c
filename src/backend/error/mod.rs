//! Backend Error Module
//!
//! This module defines the error taxonomy returned by HTTP handlers.
//! Every error can be converted to an HTTP response.
//!
//! # Architecture
//!
//! - **`types`** - `BackendError` and its constructors
//! - **`conversion`** - `IntoResponse` and conversions from lower layers
//!   (`MutationError`, `StoreError`, `SharedError`, `TokenRejected`)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Response Format
//!
//! ```json
//! { "error": "Post not found", "status": 404 }
//! ```
//!
//! Validation failures also carry the field-level list:
//!
//! ```json
//! { "error": "Validation failed", "status": 400,
//!   "errors": [{ "param": "email", "msg": "Please include a valid email" }] }
//! ```
//!
//! Internal errors never leak their detail: the caller sees `Server error`
//! and the cause is logged with `tracing::error!`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
