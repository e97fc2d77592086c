/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the router. It holds
 * the store adapter and the services built from [`AppConfig`]; the
 * `FromRef` implementations let handlers extract only the part they use.
 *
 * # Example
 *
 * ```rust,ignore
 * async fn handler(State(store): State<Arc<dyn Store>>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::profiles::github::GithubClient;
use crate::backend::server::config::AppConfig;
use crate::backend::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Persistence adapter
    pub store: Arc<dyn Store>,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
    pub github: GithubClient,
}

impl AppState {
    /// Build the services described by `config` on top of `store`
    pub fn new(config: &AppConfig, store: Arc<dyn Store>) -> Self {
        Self {
            store,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl_secs),
            hasher: PasswordHasher::new(config.bcrypt_cost),
            github: GithubClient::new(
                config.github_api_url.clone(),
                config.github_client_id.clone(),
                config.github_secret.clone(),
            ),
        }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}

impl FromRef<AppState> for GithubClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.github.clone()
    }
}
