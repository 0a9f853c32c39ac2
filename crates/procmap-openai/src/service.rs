//! Completion provider implementation.
//!
//! This module implements the [`CompletionProvider`] trait for [`OpenAiClient`].

use jiff::Timestamp;
use procmap_service::{
    CompletionProvider, CompletionRequest, CompletionResponse, ServiceHealth,
};
use reqwest::{Response, StatusCode};

use crate::chat::{ApiErrorBody, ChatRequest, ChatResponse};
use crate::client::{OpenAiClient, TRACING_TARGET};
use crate::error::Error;

/// Turns a non-success response into [`Error::Status`].
async fn status_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_owned(),
        Err(_) => body,
    };

    Error::Status { status, message }
}

#[async_trait::async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> procmap_service::Result<CompletionResponse> {
        let config = self.config();
        let url = config.completions_url();

        tracing::debug!(
            target: TRACING_TARGET,
            url = %url,
            model = request.model.as_deref().unwrap_or_default(),
            prompt_len = request.prompt_len(),
            "Sending chat completion request"
        );

        let response = self
            .http()
            .post(&url)
            .bearer_auth(&config.api_key)
            .json(&ChatRequest::from(request))
            .send()
            .await
            .map_err(Error::from)?;

        if !response.status().is_success() {
            let error = status_error(response).await;
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Chat completion rejected"
            );
            return Err(error.into());
        }

        let bytes = response.bytes().await.map_err(Error::from)?;
        let body: ChatResponse = serde_json::from_slice(&bytes).map_err(Error::from)?;
        let completion = body.into_completion().ok_or(Error::EmptyReply)?;

        tracing::debug!(
            target: TRACING_TARGET,
            finish_reason = completion.finish_reason.as_deref().unwrap_or_default(),
            content_len = completion.content.len(),
            "Chat completion received"
        );

        Ok(completion)
    }

    async fn health_check(&self) -> procmap_service::Result<ServiceHealth> {
        let started_at = Timestamp::now();
        let config = self.config();

        let result = self
            .http()
            .get(config.models_url())
            .bearer_auth(&config.api_key)
            .send()
            .await;
        let elapsed = Timestamp::now().duration_since(started_at);
        let response_time = elapsed.unsigned_abs();

        let health = match result {
            Ok(response) if response.status().is_success() => ServiceHealth::healthy(),
            // Every completion call fails with a rejected key.
            Ok(response)
                if matches!(
                    response.status(),
                    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
                ) =>
            {
                ServiceHealth::unhealthy(status_error(response).await.to_string())
            }
            Ok(response) => ServiceHealth::degraded(status_error(response).await.to_string()),
            Err(error) => ServiceHealth::unhealthy(Error::from(error).to_string()),
        };

        Ok(health.with_response_time(response_time))
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::Router;
    use axum::extract::{Json, State};
    use axum::http::HeaderMap;
    use axum::http::header::AUTHORIZATION;
    use axum::routing::{get, post};
    use procmap_service::{CompletionDefaults, ErrorKind, ServiceStatus};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    use super::*;
    use crate::config::OpenAiConfig;

    /// Request received by [`FakeApi`].
    struct RecordedRequest {
        authorization: Option<String>,
        body: Value,
    }

    /// Chat completions endpoint answering every call with a fixed reply.
    #[derive(Clone)]
    struct FakeApi {
        status: StatusCode,
        reply: Value,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl FakeApi {
        fn new(status: StatusCode, reply: Value) -> Self {
            Self {
                status,
                reply,
                requests: Arc::default(),
            }
        }

        /// Serves the fake on an ephemeral port and returns a client for it.
        async fn spawn(&self) -> anyhow::Result<OpenAiClient> {
            let app = Router::new()
                .route("/v1/chat/completions", post(chat_completions))
                .route("/v1/models", get(models))
                .with_state(self.clone());

            let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
            let addr = listener.local_addr()?;
            tokio::spawn(async move {
                let _ = axum::serve(listener, app).await;
            });

            let config = OpenAiConfig::new("sk-test")
                .with_base_url(format!("http://{addr}/v1"))
                .with_timeout(Duration::from_secs(5));
            Ok(OpenAiClient::new(config)?)
        }
    }

    async fn chat_completions(
        State(api): State<FakeApi>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        api.requests
            .lock()
            .await
            .push(RecordedRequest { authorization, body });

        (api.status, Json(api.reply.clone()))
    }

    async fn models(State(api): State<FakeApi>) -> (StatusCode, Json<Value>) {
        (api.status, Json(api.reply.clone()))
    }

    fn unreachable_client() -> OpenAiClient {
        let config = OpenAiConfig::new("sk-test")
            .with_base_url("http://127.0.0.1:9/v1")
            .with_timeout(Duration::from_secs(2));
        OpenAiClient::new(config).expect("valid config")
    }

    #[tokio::test]
    async fn completion_sends_defaults_and_bearer_key() -> anyhow::Result<()> {
        let api = FakeApi::new(
            StatusCode::OK,
            json!({
                "model": "gpt-4.1-nano-2025-04-14",
                "choices": [{
                    "message": { "role": "assistant", "content": "```dot\ndigraph G {}\n```" },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12 }
            }),
        );
        let service = api.spawn().await?.into_service(CompletionDefaults::default());

        let reply = service.complete_prompt("hello").await?;
        assert_eq!(reply, "```dot\ndigraph G {}\n```");

        let requests = api.requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer sk-test"));
        assert_eq!(
            requests[0].body,
            json!({
                "model": "gpt-4.1-nano-2025-04-14",
                "messages": [{ "role": "system", "content": "hello" }],
                "temperature": 0.0,
                "max_tokens": 2048,
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn quota_error_keeps_status_and_message() -> anyhow::Result<()> {
        let api = FakeApi::new(
            StatusCode::TOO_MANY_REQUESTS,
            json!({
                "error": {
                    "message": "You exceeded your current quota",
                    "type": "insufficient_quota"
                }
            }),
        );
        let client = api.spawn().await?;

        let error = client
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
        let message = error.to_string();
        assert!(message.contains("429"), "{message}");
        assert!(message.contains("You exceeded your current quota"), "{message}");

        Ok(())
    }

    #[tokio::test]
    async fn empty_choices_is_upstream_failure() -> anyhow::Result<()> {
        let api = FakeApi::new(StatusCode::OK, json!({ "choices": [] }));
        let client = api.spawn().await?;

        let error = client
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
        assert!(error.to_string().contains("no content"));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_key_reports_unhealthy() -> anyhow::Result<()> {
        let api = FakeApi::new(
            StatusCode::UNAUTHORIZED,
            json!({ "error": { "message": "Incorrect API key provided" } }),
        );

        let health = api.spawn().await?.health_check().await?;
        assert_eq!(health.status, ServiceStatus::Unhealthy);
        assert!(
            health
                .message
                .as_deref()
                .is_some_and(|message| message.contains("Incorrect API key"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn server_error_reports_degraded() -> anyhow::Result<()> {
        let api = FakeApi::new(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({ "error": { "message": "overloaded" } }),
        );

        let health = api.spawn().await?.health_check().await?;
        assert_eq!(health.status, ServiceStatus::Degraded);

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_api_is_upstream_failure() {
        let client = unreachable_client();
        let error = client
            .complete(&CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
    }

    #[tokio::test]
    async fn unreachable_api_reports_unhealthy() -> procmap_service::Result<()> {
        let health = unreachable_client().health_check().await?;
        assert_eq!(health.status, ServiceStatus::Unhealthy);
        assert!(health.response.is_some());
        Ok(())
    }
}
