/**
 * Registration Handler
 *
 * POST /api/users
 *
 * # Registration Process
 *
 * 1. Validate name, email and password (`ValidJson`)
 * 2. Reject an email that is already registered
 * 3. Derive the avatar from the email and hash the password
 * 4. Persist the identity
 * 5. Return a token for it
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users;
use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::backend::validation::ValidJson;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failed, body lists the fields
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - hashing, storage or signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/users HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ada", "email": "ada@example.com", "password": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn register(
    State(store): State<Arc<dyn Store>>,
    State(hasher): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    ValidJson(request): ValidJson<RegisterRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Registration request for email: {}", request.email);

    let (_, token) = users::register(
        store.as_ref(),
        &hasher,
        &tokens,
        request.name,
        request.email,
        &request.password,
    )
    .await?;

    Ok(Json(TokenResponse { token }))
}
