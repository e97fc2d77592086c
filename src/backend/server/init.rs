/**
 * Server Initialization
 *
 * # Initialization Process
 *
 * 1. Pick the store: PostgreSQL when `DATABASE_URL` is set (migrations are
 *    applied on connect), the in-memory store otherwise
 * 2. Build `AppState` from the configuration
 * 3. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::AppConfig;
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, Store, StoreError};

/// Connect the store selected by `config`
///
/// # Errors
///
/// Returns the store error when a database is configured but cannot be
/// reached or migrated.
pub async fn load_store(config: &AppConfig) -> Result<Arc<dyn Store>, StoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url).await?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing devlink backend server");

    let store = load_store(config).await?;
    let app_state = AppState::new(config, store);

    let app = create_router(app_state);
    tracing::info!("Router configured");
    Ok(app)
}
