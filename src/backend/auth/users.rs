/**
 * Registration and Login
 *
 * Credential logic on top of the user store, the password hasher and the
 * token service. Handlers in `handlers/` only adapt HTTP to these calls.
 *
 * # Login
 *
 * An unknown email and a wrong password produce the same
 * `BackendError::InvalidCredentials`; which check failed is only logged.
 */

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::backend::store::UserStore;
use crate::shared::User;

/// Create a new identity and issue its first token
///
/// # Errors
///
/// * `Conflict` - the email is already registered (also raised by the store
///   when two registrations race)
/// * `Internal` - hashing, storage or signing failed
pub async fn register<S: UserStore + ?Sized>(
    store: &S,
    hasher: &PasswordHasher,
    tokens: &TokenService,
    name: String,
    email: String,
    password: &str,
) -> Result<(User, String), BackendError> {
    if store.find_user_by_email(&email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hasher.hash(password).await?;
    let user = User::new(name, email, password_hash);
    store.insert_user(&user).await?;

    let token = tokens.issue(user.id).map_err(BackendError::internal)?;
    tracing::info!("User created successfully: {} ({})", user.id, user.email);
    Ok((user, token))
}

/// Check credentials and issue a token
///
/// # Errors
///
/// * `InvalidCredentials` - unknown email or password mismatch
/// * `Internal` - storage or signing failed
pub async fn login<S: UserStore + ?Sized>(
    store: &S,
    hasher: &PasswordHasher,
    tokens: &TokenService,
    email: &str,
    password: &str,
) -> Result<(User, String), BackendError> {
    let Some(user) = store.find_user_by_email(email).await? else {
        tracing::warn!("Login for unknown email: {}", email);
        return Err(BackendError::InvalidCredentials);
    };

    if !hasher.verify(password, &user.password_hash).await {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = tokens.issue(user.id).map_err(BackendError::internal)?;
    tracing::info!("User logged in successfully: {}", user.id);
    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::store::MemoryStore;
    use assert_matches::assert_matches;

    fn services() -> (MemoryStore, PasswordHasher, TokenService) {
        (MemoryStore::new(), PasswordHasher::new(4), TokenService::new("secret", 3600))
    }

    #[tokio::test]
    async fn test_register_token_resolves_to_user() {
        let (store, hasher, tokens) = services();
        let (user, token) = register(&store, &hasher, &tokens, "A".into(), "a@x.com".into(), "secret1")
            .await
            .unwrap();

        assert_eq!(tokens.verify(&token), Ok(user.id));
        let stored = store.find_user_by_id(user.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret1");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (store, hasher, tokens) = services();
        register(&store, &hasher, &tokens, "A".into(), "a@x.com".into(), "secret1")
            .await
            .unwrap();

        let second = register(&store, &hasher, &tokens, "B".into(), "a@x.com".into(), "other1").await;
        assert_matches!(second, Err(BackendError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_login_failures_are_identical() {
        let (store, hasher, tokens) = services();
        register(&store, &hasher, &tokens, "A".into(), "a@x.com".into(), "secret1")
            .await
            .unwrap();

        let wrong_password = login(&store, &hasher, &tokens, "a@x.com", "secret2").await.unwrap_err();
        let unknown_email = login(&store, &hasher, &tokens, "b@x.com", "secret1").await.unwrap_err();

        assert_eq!(wrong_password.status_code(), unknown_email.status_code());
        assert_eq!(wrong_password.message(), unknown_email.message());
    }

    #[tokio::test]
    async fn test_login_success() {
        let (store, hasher, tokens) = services();
        let (created, _) = register(&store, &hasher, &tokens, "A".into(), "a@x.com".into(), "secret1")
            .await
            .unwrap();

        let (user, token) = login(&store, &hasher, &tokens, "a@x.com", "secret1").await.unwrap();
        assert_eq!(user.id, created.id);
        assert_eq!(tokens.verify(&token), Ok(created.id));
    }
}
