//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Registration handler
//! ├── login.rs    - Login handler
//! └── me.rs       - Current user handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users
//! - **`login`** - POST /api/auth
//! - **`get_me`** - GET /api/auth

/// Request and response types
pub mod types;

/// Registration handler
pub mod signup;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, TokenResponse};

pub use login::login;
pub use me::get_me;
pub use signup::register;
