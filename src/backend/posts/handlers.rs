/**
 * Post Handlers
 *
 * Every route here sits behind the auth middleware. Nested-collection
 * changes load the post, apply one of the `ops` functions and save the
 * whole document back.
 *
 * # Endpoints
 *
 * - `POST /api/posts` - create a post
 * - `GET /api/posts` - all posts, newest first
 * - `GET /api/posts/{post_id}` - one post
 * - `DELETE /api/posts/{post_id}` - delete (owner only)
 * - `PUT /api/posts/like/{post_id}` - like, returns the likes
 * - `PUT /api/posts/unlike/{post_id}` - unlike, returns the likes
 * - `POST /api/posts/comment/{post_id}` - comment, returns the comments
 * - `DELETE /api/posts/comment/{post_id}/{comment_id}` - remove a comment
 *   (author only), returns the comments
 */

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::handlers::me::USER_NOT_FOUND;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::posts::ops;
use crate::backend::store::{PostStore, Store, UserStore};
use crate::backend::validation::ValidJson;
use crate::shared::{Comment, Like, Post, User};

pub const POST_NOT_FOUND: &str = "Post not found";

/// Body of a new post or comment
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct TextRequest {
    #[validate(length(min = 1, message = "Text is required"))]
    pub text: String,
}

/// Confirmation message for deletions
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

/// Parse a path id. Anything that is not a UUID cannot name a stored
/// document, so it is reported as not found.
pub(crate) fn parse_id(raw: &str, not_found: &'static str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(not_found))
}

async fn load_post(store: &dyn Store, raw_id: &str) -> Result<Post, BackendError> {
    let id = parse_id(raw_id, POST_NOT_FOUND)?;
    store
        .find_post(id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))
}

async fn load_user(store: &dyn Store, id: Uuid) -> Result<User, BackendError> {
    store.find_user_by_id(id).await?.ok_or_else(|| {
        tracing::warn!("Token subject no longer exists: {}", id);
        BackendError::not_found(USER_NOT_FOUND)
    })
}

/// Create a post authored by the caller
pub async fn create_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    ValidJson(request): ValidJson<TextRequest>,
) -> Result<(StatusCode, Json<Post>), BackendError> {
    let author = load_user(store.as_ref(), auth.user_id).await?;
    let post = Post::new(&author, request.text);
    store.insert_post(&post).await?;

    tracing::info!("Post {} created by {}", post.id, author.id);
    Ok((StatusCode::CREATED, Json(post)))
}

/// List every post, newest first
pub async fn list_posts(
    State(store): State<Arc<dyn Store>>,
    AuthUser(_): AuthUser,
) -> Result<Json<Vec<Post>>, BackendError> {
    Ok(Json(store.list_posts().await?))
}

pub async fn get_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(_): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<Post>, BackendError> {
    Ok(Json(load_post(store.as_ref(), &post_id).await?))
}

/// Delete a post. Only its owner may do so.
///
/// # Errors
///
/// * `404 Not Found` - no such post
/// * `403 Forbidden` - the caller does not own the post
pub async fn delete_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let post = load_post(store.as_ref(), &post_id).await?;
    ops::authorize_delete(&post, auth.user_id)?;
    store.delete_post(post.id).await?;

    tracing::info!("Post {} removed by {}", post.id, auth.user_id);
    Ok(Json(MessageResponse {
        msg: "Post removed".to_string(),
    }))
}

pub async fn like_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(store.as_ref(), &post_id).await?;
    ops::like(&mut post, auth.user_id)?;
    store.save_post(&post).await?;
    Ok(Json(post.likes))
}

pub async fn unlike_post(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<Like>>, BackendError> {
    let mut post = load_post(store.as_ref(), &post_id).await?;
    ops::unlike(&mut post, auth.user_id)?;
    store.save_post(&post).await?;
    Ok(Json(post.likes))
}

/// Comment on a post. The caller's current name and avatar are copied
/// into the comment.
pub async fn add_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(post_id): Path<String>,
    ValidJson(request): ValidJson<TextRequest>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let author = load_user(store.as_ref(), auth.user_id).await?;
    let mut post = load_post(store.as_ref(), &post_id).await?;
    ops::add_comment(&mut post, &author, request.text);
    store.save_post(&post).await?;
    Ok(Json(post.comments))
}

/// Remove a comment. Only the comment's author may do so, the post owner
/// included.
pub async fn remove_comment(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path((post_id, comment_id)): Path<(String, String)>,
) -> Result<Json<Vec<Comment>>, BackendError> {
    let mut post = load_post(store.as_ref(), &post_id).await?;
    let comment_id = parse_id(&comment_id, ops::COMMENT_NOT_FOUND)?;
    ops::remove_comment(&mut post, comment_id, auth.user_id)?;
    store.save_post(&post).await?;
    Ok(Json(post.comments))
}
