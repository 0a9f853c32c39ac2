//! Reqwest-based client for OpenAI-compatible chat completions.

use std::sync::Arc;

use procmap_service::{CompletionDefaults, CompletionService};
use reqwest::Client;

use crate::config::OpenAiConfig;
use crate::error::{Error, Result};

/// Tracing target for OpenAI client operations.
pub const TRACING_TARGET: &str = "procmap_openai::client";

/// Inner client that holds the HTTP client and configuration.
struct OpenAiClientInner {
    http: Client,
    config: OpenAiConfig,
}

/// Client for an OpenAI-compatible chat completions API.
///
/// The underlying connection pool is created once and shared by all clones.
///
/// # Examples
///
/// ```rust,ignore
/// use procmap_openai::{OpenAiClient, OpenAiConfig};
/// use procmap_service::CompletionDefaults;
///
/// let client = OpenAiClient::new(OpenAiConfig::new("sk-..."))?;
/// let service = client.into_service(CompletionDefaults::default());
/// let reply = service.complete_prompt("Describe the process").await?;
/// ```
#[derive(Clone)]
pub struct OpenAiClient {
    inner: Arc<OpenAiClientInner>,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Creates a new client after validating the configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        config.validate().map_err(Error::Config)?;

        let timeout = config.timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %config.base_url,
            timeout_ms = timeout.as_millis(),
            "Creating OpenAI client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        let inner = OpenAiClientInner { http, config };
        let client = Self {
            inner: Arc::new(inner),
        };

        tracing::info!(
            target: TRACING_TARGET,
            "OpenAI client created successfully"
        );

        Ok(client)
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.inner.http
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &OpenAiConfig {
        &self.inner.config
    }

    /// Converts this client into a [`CompletionService`] for dependency injection.
    pub fn into_service(self, defaults: CompletionDefaults) -> CompletionService {
        CompletionService::from_provider(self, defaults)
    }
}
