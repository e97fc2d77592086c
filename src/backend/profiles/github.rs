//! GitHub repositories
//!
//! Fetches the five most recent public repositories of a GitHub user for
//! display on a profile.

use axum::http::header::USER_AGENT;
use reqwest::StatusCode;

use crate::backend::error::BackendError;

pub const NO_GITHUB_PROFILE: &str = "No Github profile found";

const USER_AGENT_VALUE: &str = concat!("devlink/", env!("CARGO_PKG_VERSION"));

/// Thin client over the GitHub REST API
#[derive(Clone, Debug)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            client_id,
            client_secret,
        }
    }

    /// Latest five public repositories of `username`, as GitHub returns them
    ///
    /// # Errors
    ///
    /// * `NotFound` - invalid username, unknown user or any non-200 answer
    /// * `Internal` - the request itself failed
    pub async fn latest_repos(&self, username: &str) -> Result<serde_json::Value, BackendError> {
        if !is_valid_username(username) {
            tracing::warn!("Rejected GitHub username: {:?}", username);
            return Err(BackendError::not_found(NO_GITHUB_PROFILE));
        }

        let url = format!(
            "{}/users/{}/repos?per_page=5&sort=created:asc",
            self.api_url, username
        );
        let mut request = self.http.get(&url).header(USER_AGENT, USER_AGENT_VALUE);
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::internal(format!("GitHub request failed: {}", e)))?;

        if response.status() != StatusCode::OK {
            tracing::warn!("GitHub answered {} for {}", response.status(), username);
            return Err(BackendError::not_found(NO_GITHUB_PROFILE));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| BackendError::internal(format!("Invalid GitHub response: {}", e)))
    }
}

/// GitHub logins: 1 to 39 ASCII letters, digits or hyphens
pub fn is_valid_username(username: &str) -> bool {
    (1..=39).contains(&username.len())
        && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
