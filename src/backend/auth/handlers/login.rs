/**
 * Login Handler
 *
 * POST /api/auth
 *
 * Unknown email and wrong password answer with the same 400
 * `Invalid credentials` body.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users;
use crate::backend::error::BackendError;
use crate::backend::store::Store;
use crate::backend::validation::ValidJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failed, or invalid credentials
/// * `500 Internal Server Error` - storage or signing failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "ada@example.com", "password": "secret1" }
/// ```
pub async fn login(
    State(store): State<Arc<dyn Store>>,
    State(hasher): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let (_, token) = users::login(store.as_ref(), &hasher, &tokens, &request.email, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}
