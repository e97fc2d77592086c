//! Shared Module
//!
//! This module contains the document models and wire types shared by the
//! storage layer and the HTTP layer. All types are designed for JSON
//! serialization, which is also how posts and profiles are persisted.
//!
//! # Overview
//!
//! - **`user`** - Registered identities and the avatar derivation
//! - **`post`** - Posts with their `likes` and `comments` collections
//! - **`profile`** - Profiles with their `experience` and `education` collections
//! - **`error`** - Model-level validation errors

/// Identity data structure
pub mod user;

/// Post aggregate
pub mod post;

/// Profile aggregate
pub mod profile;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{User, UserSummary};
pub use post::{Comment, Like, Post};
pub use profile::{Education, Experience, Profile, ProfileUpdate, Social};
pub use error::{FieldError, SharedError};
