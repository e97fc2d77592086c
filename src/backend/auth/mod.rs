//! Authentication Module
//!
//! Identity tokens, password hashing, registration and login.
//!
//! # Architecture
//!
//! - **`sessions`** - Token Service: issue and verify signed, time-limited tokens
//! - **`password`** - Password Hasher: bcrypt hash and verify
//! - **`users`** - Registration and login over the user store
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── sessions.rs     - Token Service
//! ├── password.rs     - Password Hasher
//! ├── users.rs        - Registration and login
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → identity created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → auth middleware resolves the subject → identity returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialised
//! - Tokens are stateless and expire after the configured TTL (1 hour by default)
//! - Login failures do not reveal whether the email exists

/// Token Service
pub mod sessions;

/// Password Hasher
pub mod password;

/// Registration and login
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, IssueError, TokenRejected, TokenService};
