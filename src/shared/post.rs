//! Post Data Structure
//!
//! A post is an aggregate document owned by one user. It embeds two nested
//! collections, `likes` and `comments`, both kept newest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::user::User;

/// A like left on a post. At most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    /// User who liked the post
    pub user: Uuid,
}

/// A comment on a post.
///
/// `name` and `avatar` are copied from the author when the comment is
/// written and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    /// Author of the comment
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Create a comment attributed to `author`.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            date: Utc::now(),
        }
    }
}

/// A post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Owner of the post
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a post owned by `author`, copying the author's display fields.
    pub fn new(author: &User, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: author.id,
            text,
            name: author.name.clone(),
            avatar: author.avatar.clone(),
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }
}
