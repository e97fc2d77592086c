//! Authentication test helpers

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use super::TestApp;

/// A registered test user
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register through the API and resolve the new user's id
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let (status, body) = app
        .post(
            "/api/users",
            None,
            json!({ "name": name, "email": email, "password": password }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {}", body);

    let token = body["token"].as_str().unwrap().to_string();
    let id = app.state.tokens.verify(&token).unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(app: &TestApp, name: &str) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4().simple());
    register_user(app, name, &email, "secret1").await
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
