//! Scripted completion provider for testing.
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! procmap-service = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use procmap_service::completion::MockProvider;
//!
//! let provider = MockProvider::with_reply("```dot\ndigraph G {}\n```");
//! let service = provider.clone().into_service();
//!
//! // ... exercise code that uses the service ...
//!
//! assert_eq!(provider.call_count().await, 1);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::{
    CompletionDefaults, CompletionProvider, CompletionRequest, CompletionResponse,
    CompletionService, Result,
};
use crate::types::ServiceHealth;
use crate::{Error, ErrorKind};

/// Reply produced when nothing else was scripted.
const FALLBACK_REPLY: &str = "Mock completion reply";

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<String>,
    fallback: Option<String>,
    failure: Option<(ErrorKind, Option<String>)>,
    requests: Vec<CompletionRequest>,
}

/// Scripted provider that records every request it receives.
///
/// Replies are served from a queue first, then from the fixed fallback reply.
/// A provider built with [`MockProvider::failing`] fails every call instead.
#[derive(Clone, Debug, Default)]
pub struct MockProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Creates a provider that answers every request with the fallback reply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that answers every request with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        let state = MockState {
            fallback: Some(reply.into()),
            ..Default::default()
        };

        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Creates a provider that fails every request with an error of the same
    /// kind and message as `error`.
    pub fn failing(error: Error) -> Self {
        let state = MockState {
            failure: Some((error.kind, error.message)),
            ..Default::default()
        };

        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Queues a reply served before the fallback.
    pub async fn push_reply(&self, reply: impl Into<String>) {
        self.state.lock().await.replies.push_back(reply.into());
    }

    /// Returns every request received so far.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Returns the prompts of every request received so far.
    pub async fn prompts(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state.requests.iter().map(|r| r.prompt.clone()).collect()
    }

    /// Returns the number of completion calls made.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Wraps this provider into a service with default settings.
    pub fn into_service(self) -> CompletionService {
        CompletionService::from_provider(self, CompletionDefaults::default())
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let mut state = self.state.lock().await;
        state.requests.push(request.clone());

        if let Some((kind, message)) = &state.failure {
            let error = Error::new(*kind);
            return Err(match message {
                Some(message) => error.with_message(message.clone()),
                None => error,
            });
        }

        let content = match state.replies.pop_front() {
            Some(reply) => reply,
            None => state
                .fallback
                .clone()
                .unwrap_or_else(|| FALLBACK_REPLY.to_owned()),
        };

        let mut response = CompletionResponse::new(content).with_finish_reason("stop");
        if let Some(model) = &request.model {
            response = response.with_model(model.clone());
        }

        Ok(response)
    }

    async fn health_check(&self) -> Result<ServiceHealth> {
        let state = self.state.lock().await;
        Ok(match &state.failure {
            Some((_, message)) => {
                ServiceHealth::unhealthy(message.clone().unwrap_or_else(|| "failing".to_owned()))
            }
            None => ServiceHealth::healthy(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_replies_come_first() -> Result<()> {
        let provider = MockProvider::with_reply("fallback");
        provider.push_reply("first").await;

        let request = CompletionRequest::new("p");
        assert_eq!(provider.complete(&request).await?.content, "first");
        assert_eq!(provider.complete(&request).await?.content, "fallback");
        assert_eq!(provider.call_count().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn failing_provider_records_the_attempt() {
        let provider = MockProvider::failing(Error::upstream());
        let result = provider.complete(&CompletionRequest::new("p")).await;

        assert!(result.is_err());
        assert_eq!(provider.prompts().await, vec!["p".to_owned()]);
    }
}
