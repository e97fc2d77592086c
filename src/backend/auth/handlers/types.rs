/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login and current
 * user handlers. Request bodies carry their `validator` rules.
 */

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Plain password, hashed before storage
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Returned by registration and login
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}
