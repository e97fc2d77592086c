//! Server Module
//!
//! # Architecture
//!
//! - **`config`** - `AppConfig`, its builder and environment loading
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - store selection and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()`, a missing
//!    `JWT_SECRET` stops startup
//! 2. **Store Selection**: PostgreSQL or in-memory
//! 3. **State Creation**: token service, password hasher, GitHub client
//! 4. **Router Creation**: routes, auth middleware, trace and CORS layers

/// Server configuration
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use init::create_app;
pub use state::AppState;
