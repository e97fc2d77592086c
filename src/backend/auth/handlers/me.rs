/**
 * Current User Handler
 *
 * GET /api/auth
 *
 * Requires the auth middleware. Returns the stored identity of the token
 * subject, without the password hash.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::store::{Store, UserStore};
use crate::shared::User;

/// Message for a valid token whose identity no longer exists
pub const USER_NOT_FOUND: &str = "User not found";

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - no token or token rejected (middleware)
/// * `404 Not Found` - the account was deleted after the token was issued
pub async fn get_me(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<User>, BackendError> {
    let user = store.find_user_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        BackendError::not_found(USER_NOT_FOUND)
    })?;

    Ok(Json(user))
}
