/**
 * Server Configuration
 *
 * Everything the server needs at startup, built either explicitly through
 * [`AppConfigBuilder`] or from the environment with [`AppConfig::from_env`]
 * (after `dotenv` has loaded `.env`).
 *
 * # Environment Variables
 *
 * | Variable | Default | |
 * |---|---|---|
 * | `JWT_SECRET` | required | token signing secret |
 * | `TOKEN_TTL_SECS` | 3600 | token lifetime |
 * | `BCRYPT_COST` | 10 | must be within 4..=31 |
 * | `DATABASE_URL` | unset | PostgreSQL; in-memory store when unset |
 * | `SERVER_PORT` | 5000 | |
 * | `GITHUB_CLIENT_ID` / `GITHUB_SECRET` | unset | GitHub API credentials |
 * | `GITHUB_API_URL` | `https://api.github.com` | |
 *
 * A configuration error stops the server from starting.
 */

use std::str::FromStr;

use thiserror::Error;

use crate::backend::auth::password::DEFAULT_COST;

pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub bcrypt_cost: u32,
    pub database_url: Option<String>,
    pub server_port: u16,
    pub github_client_id: Option<String>,
    pub github_secret: Option<String>,
    pub github_api_url: String,
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, one key at a time
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut builder = AppConfig::builder();
        if let Some(secret) = get("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(ttl) = parse_var(get("TOKEN_TTL_SECS"), "TOKEN_TTL_SECS")? {
            builder = builder.token_ttl_secs(ttl);
        }
        if let Some(cost) = parse_var(get("BCRYPT_COST"), "BCRYPT_COST")? {
            builder = builder.bcrypt_cost(cost);
        }
        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(port) = parse_var(get("SERVER_PORT"), "SERVER_PORT")? {
            builder = builder.server_port(port);
        }
        if let (Some(id), Some(secret)) = (get("GITHUB_CLIENT_ID"), get("GITHUB_SECRET")) {
            builder = builder.github_credentials(id, secret);
        }
        if let Some(url) = get("GITHUB_API_URL") {
            builder = builder.github_api_url(url);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if !(1..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                value: self.token_ttl_secs.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(raw: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value })
    })
    .transpose()
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    server_port: Option<u16>,
    github_client_id: Option<String>,
    github_secret: Option<String>,
    github_api_url: Option<String>,
}

impl AppConfigBuilder {
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_secs(mut self, ttl: u64) -> Self {
        self.token_ttl_secs = Some(ttl);
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    pub fn github_credentials(mut self, client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.github_client_id = Some(client_id.into());
        self.github_secret = Some(secret.into());
        self
    }

    pub fn github_api_url(mut self, url: impl Into<String>) -> Self {
        self.github_api_url = Some(url.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl_secs: self.token_ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_COST),
            database_url: self.database_url,
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            github_client_id: self.github_client_id,
            github_secret: self.github_secret,
            github_api_url: self
                .github_api_url
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().jwt_secret("s").build().unwrap();
        assert_eq!(config.token_ttl_secs, 3600);
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.database_url, None);
        assert_eq!(config.github_api_url, "https://api.github.com");
    }

    #[test]
    fn test_secret_required() {
        assert_eq!(
            AppConfig::builder().build().unwrap_err(),
            ConfigError::MissingValue("JWT_SECRET")
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("JWT_SECRET", "  ")])).unwrap_err(),
            ConfigError::MissingValue("JWT_SECRET")
        );
    }

    #[test]
    fn test_from_lookup() {
        let config = AppConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "secret"),
            ("TOKEN_TTL_SECS", "60"),
            ("BCRYPT_COST", "4"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/devlink"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_secret, "secret");
        assert_eq!(config.token_ttl_secs, 60);
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/devlink"));
    }

    #[test]
    fn test_invalid_values() {
        let bad_port = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("SERVER_PORT", "http")]));
        assert!(matches!(bad_port, Err(ConfigError::InvalidValue { key: "SERVER_PORT", .. })));

        let bad_cost = AppConfig::builder().jwt_secret("s").bcrypt_cost(3).build();
        assert!(matches!(bad_cost, Err(ConfigError::InvalidValue { key: "BCRYPT_COST", .. })));
    }

    #[test]
    fn test_token_ttl_bounds() {
        let huge = AppConfig::from_lookup(lookup(&[
            ("JWT_SECRET", "s"),
            ("TOKEN_TTL_SECS", &u64::MAX.to_string()),
        ]));
        assert!(matches!(huge, Err(ConfigError::InvalidValue { key: "TOKEN_TTL_SECS", .. })));

        let zero = AppConfig::builder().jwt_secret("s").token_ttl_secs(0).build();
        assert!(matches!(zero, Err(ConfigError::InvalidValue { key: "TOKEN_TTL_SECS", .. })));

        let year = AppConfig::builder().jwt_secret("s").token_ttl_secs(MAX_TOKEN_TTL_SECS).build();
        assert_eq!(year.unwrap().token_ttl_secs, MAX_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_github_credentials_need_both() {
        let config = AppConfig::from_lookup(lookup(&[("JWT_SECRET", "s"), ("GITHUB_CLIENT_ID", "id")])).unwrap();
        assert_eq!(config.github_client_id, None);
    }
}
