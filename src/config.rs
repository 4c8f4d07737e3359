//! Client configuration
//!
//! The public and the API-key endpoints are two instances of the same
//! [`ClientConfig`]; nothing is kept in global state.

use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS, PRO_API_URL, PUBLIC_API_URL,
    REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use std::time::Duration;

/// Settings for a [`GeckoClient`](crate::client::GeckoClient)
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.coingecko.com/api/v3`
    pub base_url: String,

    /// Pro API key, sent as `x-cg-pro-api-key`
    pub api_key: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration for the free public API
    pub fn public() -> Self {
        Self {
            base_url: PUBLIC_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Configuration for the pro API with the given key
    pub fn pro(api_key: impl Into<String>) -> Self {
        Self {
            base_url: PRO_API_URL.to_string(),
            api_key: Some(api_key.into()),
            ..Self::public()
        }
    }

    /// Builds a configuration from the environment
    ///
    /// `COINGECKO_API_KEY` selects the pro API, `COINGECKO_BASE_URL` and
    /// `COINGECKO_TIMEOUT_SECS` override the defaults. Unset or empty
    /// variables are ignored, as is a timeout that is not a number.
    pub fn from_env() -> Self {
        let mut config = match non_empty_var(ENV_API_KEY) {
            Some(key) => Self::pro(key),
            None => Self::public(),
        };

        if let Some(base_url) = non_empty_var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = non_empty_var(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => config.timeout = Duration::from_secs(secs),
                Err(_) => tracing::warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }

        config
    }

    /// Overrides the base URL; a trailing slash is dropped
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// True if requests carry an API key
    pub fn is_pro(&self) -> bool {
        self.api_key.is_some()
    }

    /// Joins an endpoint path and an optional encoded query onto the base URL
    pub(crate) fn endpoint_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(query) if !query.is_empty() => format!("{}{}?{}", self.base_url, path, query),
            _ => format!("{}{}", self.base_url, path),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::public()
    }
}

// The API key stays out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_and_pro_configs() {
        let public = ClientConfig::public();
        assert_eq!(public.base_url, PUBLIC_API_URL);
        assert!(!public.is_pro());

        let pro = ClientConfig::pro("secret");
        assert_eq!(pro.base_url, PRO_API_URL);
        assert_eq!(pro.api_key.as_deref(), Some("secret"));
        assert_eq!(pro.timeout, public.timeout);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ClientConfig::public().with_base_url("http://127.0.0.1:9000/api/v3/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api/v3");
        assert_eq!(
            config.endpoint_url("/ping", None),
            "http://127.0.0.1:9000/api/v3/ping"
        );
        assert_eq!(
            config.endpoint_url("/simple/price", Some("ids=bitcoin")),
            "http://127.0.0.1:9000/api/v3/simple/price?ids=bitcoin"
        );
        assert_eq!(
            config.endpoint_url("/global", Some("")),
            "http://127.0.0.1:9000/api/v3/global"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::pro("secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
