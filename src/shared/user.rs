//! Identity Data Structure
//!
//! A registered account. The password hash is carried for the credential
//! checks but is never serialised towards clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login email, unique across users
    pub email: String,
    /// bcrypt digest of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Avatar URL derived from the email at registration
    pub avatar: String,
    /// Registration time
    pub date: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and the avatar derived from `email`.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar = avatar_url(&email);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            avatar,
            date: Utc::now(),
        }
    }
}

/// Public subset of a user, embedded in profile responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Deterministic Gravatar URL for an email address.
///
/// The address is trimmed and lower-cased before hashing, so the same
/// mailbox always maps to the same avatar.
pub fn avatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hex::encode(digest))
}
