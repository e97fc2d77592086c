/**
 * PostgreSQL Store
 *
 * Users are stored as plain rows. Posts and profiles are stored as whole
 * JSONB documents next to the columns needed to look them up (owner and
 * creation date), so embedded likes, comments, experience and education
 * round-trip without extra tables.
 *
 * Schema lives in `migrations/` and is applied by [`PgStore::connect`].
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{PostStore, ProfileStore, StoreError, StoreResult, UserStore};
use crate::shared::{Post, Profile, User};

/// sqlx-backed implementation of every store port
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Row shape of the `users` table
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    avatar: String,
    date: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            avatar: row.avatar,
            date: row.date,
        }
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and run pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` when the connection or a migration fails.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        tracing::info!("Database migrations completed successfully");

        Ok(Self::new(pool))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: &User) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, avatar, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar)
        .bind(user.date)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(StoreError::Duplicate("email")),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, avatar, date
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, avatar, date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete_user(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PostStore for PgStore {
    async fn insert_post(&self, post: &Post) -> StoreResult<()> {
        sqlx::query("INSERT INTO posts (id, user_id, doc, date) VALUES ($1, $2, $3, $4)")
            .bind(post.id)
            .bind(post.user)
            .bind(Json(post))
            .bind(post.date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_posts(&self) -> StoreResult<Vec<Post>> {
        let docs: Vec<(Json<Post>,)> = sqlx::query_as("SELECT doc FROM posts ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(docs.into_iter().map(|(Json(post),)| post).collect())
    }

    async fn find_post(&self, id: Uuid) -> StoreResult<Option<Post>> {
        let doc: Option<(Json<Post>,)> = sqlx::query_as("SELECT doc FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc.map(|(Json(post),)| post))
    }

    async fn save_post(&self, post: &Post) -> StoreResult<()> {
        sqlx::query("UPDATE posts SET doc = $2 WHERE id = $1")
            .bind(post.id)
            .bind(Json(post))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_posts_by_user(&self, user: Uuid) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM posts WHERE user_id = $1")
            .bind(user)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_profile_by_user(&self, user: Uuid) -> StoreResult<Option<Profile>> {
        let doc: Option<(Json<Profile>,)> =
            sqlx::query_as("SELECT doc FROM profiles WHERE user_id = $1")
                .bind(user)
                .fetch_optional(&self.pool)
                .await?;
        Ok(doc.map(|(Json(profile),)| profile))
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        let docs: Vec<(Json<Profile>,)> =
            sqlx::query_as("SELECT doc FROM profiles ORDER BY date ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(docs.into_iter().map(|(Json(profile),)| profile).collect())
    }

    async fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, user_id, doc, date)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(profile.id)
        .bind(profile.user)
        .bind(Json(profile))
        .bind(profile.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
