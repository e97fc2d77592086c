//! Persistence Module
//!
//! The core only talks to storage through the port traits defined here.
//! Documents are read and written whole: nested-collection changes are a
//! read-modify-write done by the handlers, and concurrent writers on the same
//! document race with last-write-wins semantics. No caching happens here.
//!
//! # Adapters
//!
//! - **`memory`** - `MemoryStore`, in-process maps behind `RwLock`s
//! - **`postgres`** - `PgStore`, PostgreSQL through sqlx with JSONB documents
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Port traits and StoreError
//! ├── memory.rs    - In-memory adapter
//! └── postgres.rs  - PostgreSQL adapter
//! ```

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Post, Profile, User};

/// In-memory adapter
pub mod memory;

/// PostgreSQL adapter
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint was violated (e.g. email already registered)
    #[error("duplicate value for {0}")]
    Duplicate(&'static str),

    /// Database driver error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored document could not be (de)serialized
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Credential store: registered identities.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `Duplicate("email")` if the email is taken.
    async fn insert_user(&self, user: &User) -> StoreResult<()>;

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Remove a user, returning whether it existed.
    async fn delete_user(&self, id: Uuid) -> StoreResult<bool>;
}

/// Post documents.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert_post(&self, post: &Post) -> StoreResult<()>;

    /// All posts, newest first.
    async fn list_posts(&self) -> StoreResult<Vec<Post>>;

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>>;

    /// Overwrite the stored document with `post`.
    async fn save_post(&self, post: &Post) -> StoreResult<()>;

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;

    /// Remove every post owned by `user`, returning how many were removed.
    async fn delete_posts_by_user(&self, user: Uuid) -> StoreResult<u64>;
}

/// Profile documents, at most one per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile_by_user(&self, user: Uuid) -> StoreResult<Option<Profile>>;

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>>;

    /// Insert or overwrite the profile of `profile.user`.
    async fn save_profile(&self, profile: &Profile) -> StoreResult<()>;

    async fn delete_profile_by_user(&self, user: Uuid) -> StoreResult<bool>;
}

/// Everything the backend needs from storage.
pub trait Store: UserStore + PostStore + ProfileStore {}

impl<T> Store for T where T: UserStore + PostStore + ProfileStore {}
