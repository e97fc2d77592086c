/**
 * In-Memory Store
 *
 * Keeps users, posts and profiles in process memory. Used when no
 * `DATABASE_URL` is configured and by the test suite.
 *
 * # Thread Safety
 *
 * Each collection sits behind its own `Arc<RwLock<>>`, so the store can be
 * cloned into every handler. Individual calls are atomic; a load followed by
 * a save is not.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PostStore, ProfileStore, StoreError, StoreResult, UserStore};
use crate::shared::{Post, Profile, User};

/// In-memory implementation of every store port
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
    /// Keyed by owner id
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::Duplicate("email"));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.users.write().await.remove(&id).is_some())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert_post(&self, post: &Post) -> StoreResult<()> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn save_post(&self, post: &Post) -> StoreResult<()> {
        // a post deleted since it was loaded stays deleted
        if let Some(slot) = self.posts.write().await.get_mut(&post.id) {
            *slot = post.clone();
        }
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.posts.write().await.remove(&id).is_some())
    }

    async fn delete_posts_by_user(&self, user: Uuid) -> StoreResult<u64> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|_, post| post.user != user);
        Ok((before - posts.len()) as u64)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_profile_by_user(&self, user: Uuid) -> StoreResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&user).cloned())
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self.profiles.read().await.values().cloned().collect();
        profiles.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(profiles)
    }

    async fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        self.profiles.write().await.insert(profile.user, profile.clone());
        Ok(())
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> StoreResult<bool> {
        Ok(self.profiles.write().await.remove(&user).is_some())
    }
}
