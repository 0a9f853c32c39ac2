//! Completion service with observability.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{
    CompletionDefaults, CompletionProvider, CompletionRequest, CompletionResponse, Result,
    TRACING_TARGET,
};
use crate::types::ServiceHealth;

/// Completion service with observability.
///
/// This service wraps any provider implementing [`CompletionProvider`] and adds
/// structured logging for all operations. Cloning is cheap.
#[derive(Clone)]
pub struct CompletionService {
    provider: Arc<dyn CompletionProvider>,
    defaults: Arc<CompletionDefaults>,
}

impl fmt::Debug for CompletionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionService")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl CompletionService {
    /// Create a new completion service from a provider.
    pub fn from_provider<P>(provider: P, defaults: CompletionDefaults) -> Self
    where
        P: CompletionProvider + 'static,
    {
        Self::from_shared(Arc::new(provider), defaults)
    }

    /// Create a new completion service from an already shared provider.
    pub fn from_shared(provider: Arc<dyn CompletionProvider>, defaults: CompletionDefaults) -> Self {
        Self {
            provider,
            defaults: Arc::new(defaults),
        }
    }

    /// Returns the settings applied by [`complete_prompt`].
    ///
    /// [`complete_prompt`]: Self::complete_prompt
    pub fn defaults(&self) -> &CompletionDefaults {
        &self.defaults
    }

    /// Sends an explicit request to the provider.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET,
            model = request.model.as_deref().unwrap_or_default(),
            prompt_len = request.prompt_len(),
            max_tokens = request.max_tokens,
            "Processing completion request"
        );

        let result = self.provider.complete(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    model = response.model.as_deref().unwrap_or_default(),
                    finish_reason = response.finish_reason.as_deref().unwrap_or_default(),
                    content_len = response.content.len(),
                    elapsed_ms = elapsed.as_millis(),
                    "Completion successful"
                );

                if response.is_truncated() {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        max_tokens = request.max_tokens,
                        "Completion stopped at the token cap"
                    );
                }
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    kind = error.kind().as_ref(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Completion failed"
                );
            }
        }

        result
    }

    /// Sends a prompt with the configured defaults and returns the reply text.
    pub async fn complete_prompt(&self, prompt: impl Into<String>) -> Result<String> {
        let request = self.defaults.request(prompt);
        let response = self.complete(&request).await?;
        Ok(response.content)
    }

    /// Perform a health check on the underlying provider.
    pub async fn health_check(&self) -> Result<ServiceHealth> {
        let started_at = Timestamp::now();

        let result = self.provider.health_check().await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(health) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    status = ?health.status,
                    elapsed_ms = elapsed.as_millis(),
                    "Health check completed"
                );
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Health check failed"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockProvider;
    use crate::{Error, ErrorKind};

    #[tokio::test]
    async fn complete_prompt_applies_defaults() -> Result<()> {
        let provider = MockProvider::with_reply("digraph G {}");
        let service = provider.clone().into_service();

        let reply = service.complete_prompt("draw this").await?;
        assert_eq!(reply, "digraph G {}");

        let requests = provider.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, "draw this");
        assert_eq!(requests[0].temperature, 0.0);
        assert_eq!(requests[0].max_tokens, 2048);
        Ok(())
    }

    #[tokio::test]
    async fn provider_failure_is_propagated() {
        let provider = MockProvider::failing(Error::upstream().with_message("quota exceeded"));
        let service = provider.into_service();

        let error = service.complete_prompt("anything").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
        assert_eq!(error.to_string(), "quota exceeded");
    }

    #[tokio::test]
    async fn custom_defaults_reach_the_provider() -> Result<()> {
        let provider = MockProvider::with_reply("ok");
        let defaults = CompletionDefaults {
            model: "local-model".to_owned(),
            temperature: 0.5,
            max_tokens: 64,
        };
        let service = CompletionService::from_provider(provider.clone(), defaults);

        service.complete_prompt("x").await?;
        let requests = provider.requests().await;
        assert_eq!(requests[0].model.as_deref(), Some("local-model"));
        assert_eq!(requests[0].max_tokens, 64);
        Ok(())
    }
}
