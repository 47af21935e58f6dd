//! Startup configuration for the search client
//!
//! The configuration is built once (from the environment, then overridden
//! by CLI flags) and passed explicitly to [`GitHubClient::new`](crate::github::GitHubClient::new).

use std::env;
use std::time::Duration;

/// Environment variable prefix used by this application
pub const ENV_PREFIX: &str = "REPO_SEARCH";

/// Fallback token variable shared with other GitHub tooling
const FALLBACK_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Bearer credential sent with every request. Empty when no token is configured.
    pub api_token: String,
    /// Overrides `https://api.github.com` (GitHub Enterprise, local mocks)
    pub api_base_uri: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl SearchConfig {
    pub fn new<T: Into<String>>(api_token: T) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Name of a prefixed environment variable, e.g. `REPO_SEARCH_GITHUB_TOKEN`
    pub fn env_var_name(name: &str) -> String {
        format!("{}_{}", ENV_PREFIX, name)
    }

    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// A missing token yields an empty credential; requests are still sent
    /// and the API reports the authentication failure.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(&Self::env_var_name("GITHUB_TOKEN"))
            .or_else(|| lookup(FALLBACK_TOKEN_ENV))
            .unwrap_or_default();

        let api_base_uri =
            lookup(&Self::env_var_name("API_BASE_URI")).filter(|uri| !uri.trim().is_empty());

        let request_timeout = lookup(&Self::env_var_name("REQUEST_TIMEOUT"))
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        if api_token.is_empty() {
            tracing::warn!(
                "No GitHub token configured ({} or {}); requests will be unauthenticated",
                Self::env_var_name("GITHUB_TOKEN"),
                FALLBACK_TOKEN_ENV
            );
        }

        Self {
            api_token,
            api_base_uri,
            request_timeout,
        }
    }

    pub fn with_api_token(mut self, api_token: Option<String>) -> Self {
        if let Some(token) = api_token {
            self.api_token = token;
        }
        self
    }

    pub fn with_api_base_uri(mut self, api_base_uri: Option<String>) -> Self {
        if api_base_uri.is_some() {
            self.api_base_uri = api_base_uri;
        }
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Option<Duration>) -> Self {
        if request_timeout.is_some() {
            self.request_timeout = request_timeout;
        }
        self
    }
}
