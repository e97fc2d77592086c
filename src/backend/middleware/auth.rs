/**
 * Auth Guard
 *
 * Middleware for routes that require an authenticated caller. The token is
 * read from the `x-auth-token` header, or from `Authorization: Bearer`
 * when that header is absent, and verified with the Token Service. On
 * success the subject id is attached to the request extensions.
 *
 * The guard performs no store lookup: a token signed for an account that
 * has since been deleted is accepted until it expires. Handlers that need
 * the identity record answer 404 in that case.
 *
 * # Rejections
 *
 * - no token → 401 `No token, authorization denied`
 * - bad signature, expired or malformed → 401 `Token is not valid`; the
 *   actual reason is logged at `warn` only
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Header carrying the identity token
pub const TOKEN_HEADER: &str = "x-auth-token";

/// Message for a request without any token
pub const NO_TOKEN: &str = "No token, authorization denied";

/// Caller identity resolved from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Read the raw token from the request headers
fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    if let Some(token) = headers.get(TOKEN_HEADER).and_then(|h| h.to_str().ok()) {
        return Some(token.trim());
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Authentication middleware
///
/// 1. Extracts the token from the request headers
/// 2. Verifies it with the Token Service
/// 3. Attaches `AuthenticatedUser` to the request extensions
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = token_from_headers(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing authentication token");
        BackendError::unauthorized(NO_TOKEN)
    })?;

    let user_id = tokens.verify(token)?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated caller
///
/// Only usable on routes behind [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts.extensions.get::<AuthenticatedUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthenticatedUser not found in request extensions");
            BackendError::unauthorized(NO_TOKEN)
        })?;

        Ok(AuthUser(user))
    }
}
