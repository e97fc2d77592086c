//! Profiles Module
//!
//! - **`ops`** - experience and education mutations on a loaded profile
//! - **`github`** - GitHub repository lookup
//! - **`handlers`** - HTTP handlers for `/api/profile`

/// Profile sub-entry mutations
pub mod ops;

/// GitHub client
pub mod github;

/// HTTP handlers
pub mod handlers;

pub use github::GithubClient;
pub use handlers::{
    add_education, add_experience, delete_account, get_my_profile, get_profile_by_user, github_repos,
    list_profiles, remove_education, remove_experience, upsert_profile,
};
