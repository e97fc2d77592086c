//! Backend Module
//!
//! Server-side code: an Axum HTTP server for a small developer social
//! network. Users register and log in, keep a profile with experience and
//! education entries, and write posts that others like and comment on.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, initialization
//! - **`routes`** - route table and router assembly
//! - **`auth`** - Token Service, Password Hasher, registration and login
//! - **`middleware`** - Auth Guard
//! - **`mutator`** - ownership-checked mutation of nested collections
//! - **`posts`** - post handlers and their likes/comments operations
//! - **`profiles`** - profile handlers, experience/education operations, GitHub
//! - **`store`** - persistence ports with in-memory and PostgreSQL adapters
//! - **`validation`** - validated JSON extractor
//! - **`error`** - HTTP error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Auth Guard
//! ├── mutator.rs      - Nested-collection mutation rules
//! ├── posts/          - Posts
//! ├── profiles/       - Profiles
//! ├── store/          - Persistence
//! ├── validation.rs   - Request validation
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! inbound request → Auth Guard (verifies the token, attaches the caller id)
//! → handler loads the aggregate → `mutator` applies the change after the
//! authorization check → the whole document is saved back.

/// Server initialization, configuration and state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Request middleware
pub mod middleware;

/// Nested-collection mutation rules
pub mod mutator;

/// Posts
pub mod posts;

/// Profiles
pub mod profiles;

/// Persistence
pub mod store;

/// Request validation
pub mod validation;

/// Backend-specific error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppConfig, AppState};
