//! Configuration for the OpenAI client.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default timeout for completion requests: 120 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Connection settings for an OpenAI-compatible API.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct OpenAiConfig {
    /// API key sent as a bearer token.
    ///
    /// Left empty when unset so that [`validate`] reports it.
    ///
    /// [`validate`]: Self::validate
    #[cfg_attr(
        feature = "config",
        arg(
            long = "openai-api-key",
            env = "OPENAI_API_KEY",
            default_value = "",
            hide_default_value = true,
            hide_env_values = true
        )
    )]
    pub api_key: String,

    /// API root, without the `/chat/completions` suffix.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)
    )]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-timeout", env = "OPENAI_TIMEOUT", default_value_t = default_timeout_secs())
    )]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header; defaults to `procmap/<version>`.
    #[cfg_attr(
        feature = "config",
        arg(long = "openai-user-agent", env = "OPENAI_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl OpenAiConfig {
    /// Creates a configuration with the given key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }

    /// Sets the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Sets the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns the request timeout.
    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the configured or default User-Agent.
    pub fn effective_user_agent(&self) -> String {
        match self.user_agent.as_deref().map(str::trim) {
            Some(agent) if !agent.is_empty() => agent.to_owned(),
            _ => format!("procmap/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Returns the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Returns the model listing endpoint used for health checks.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url.trim_end_matches('/'))
    }

    /// Validates the configuration.
    ///
    /// Rejects a blank API key, a base URL that is not http(s), and a zero
    /// timeout.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("OPENAI_API_KEY is not set".to_owned());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|err| format!("Invalid base URL '{}': {err}", self.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Base URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_secs == 0 {
            return Err("OpenAI timeout cannot be 0".to_owned());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OpenAiConfig::new("sk-test");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert!(config.effective_user_agent().starts_with("procmap/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoints_ignore_trailing_slash() {
        let config = OpenAiConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.models_url(), "http://localhost:8080/v1/models");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(OpenAiConfig::new("").validate().is_err());
        assert!(OpenAiConfig::new("   ").validate().is_err());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config = OpenAiConfig::new("k").with_base_url("ftp://example.com");
        assert!(config.validate().is_err());

        let config = OpenAiConfig::new("k").with_base_url("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = OpenAiConfig::new("k").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_redacts_key() {
        let debug = format!("{:?}", OpenAiConfig::new("sk-secret"));
        assert!(!debug.contains("sk-secret"));
    }
}
