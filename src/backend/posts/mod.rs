//! Posts Module
//!
//! - **`ops`** - likes, comments and the delete check on a loaded [`Post`](crate::shared::Post)
//! - **`handlers`** - HTTP handlers for `/api/posts`

/// Post mutations
pub mod ops;

/// HTTP handlers
pub mod handlers;

pub use handlers::{
    add_comment, create_post, delete_post, get_post, like_post, list_posts, remove_comment, unlike_post,
};
