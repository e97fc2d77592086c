//! Middleware Module
//!
//! - **`auth`** - Auth Guard protecting routes that need a caller identity
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use devlink::backend::middleware::auth_middleware;
//!
//! let protected = routes.route_layer(from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
