//! devlink - Main Library
//!
//! Backend for a small developer social network: accounts with token
//! authentication, profiles with experience and education entries, and
//! posts with likes and comments.
//!
//! # Module Structure
//!
//! - **`shared`** - document and wire types (users, posts, profiles) and
//!   model-level validation errors
//! - **`backend`** - Axum server (only compiled with the `ssr` feature)
//!   - Token Service, Password Hasher and Auth Guard
//!   - ownership-checked mutation of likes, comments, experience and education
//!   - in-memory and PostgreSQL stores
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend module and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use devlink::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod shared;

#[cfg(feature = "ssr")]
pub mod backend;
