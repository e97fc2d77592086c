//! Common test utilities and helpers
//!
//! - `TestApp` - the full router over a fresh in-memory store
//! - `auth_helpers` - registration shortcuts and token headers

#![allow(dead_code)]

pub mod auth_helpers;

pub use auth_helpers::*;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use devlink::backend::routes::create_router;
use devlink::backend::server::{AppConfig, AppState};
use devlink::backend::store::{MemoryStore, Store};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";

/// Router plus direct access to its store
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::builder().jwt_secret(TEST_SECRET).bcrypt_cost(4))
    }

    /// App whose GitHub client talks to `api_url`
    pub fn with_github(api_url: &str) -> Self {
        Self::with_config(
            AppConfig::builder()
                .jwt_secret(TEST_SECRET)
                .bcrypt_cost(4)
                .github_api_url(api_url),
        )
    }

    fn with_config(builder: devlink::backend::server::AppConfigBuilder) -> Self {
        let config = builder.build().unwrap();
        let store = MemoryStore::new();
        let shared: Arc<dyn Store> = Arc::new(store.clone());
        let state = AppState::new(&config, shared);
        Self {
            router: create_router(state.clone()),
            state,
            store,
        }
    }

    /// Send one request and return the status with the decoded JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("x-auth-token", token);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(&self, path: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::PUT, path, token, body).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, token, None).await
    }
}
