//! Health check handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use procmap_service::{CompletionService, ServiceHealth};

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "procmap_server::handler::monitors";

/// Reports the health of the server and its completion provider.
///
/// Answers `503` when the provider is unreachable.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(completion): State<CompletionService>,
) -> Result<(StatusCode, Json<HealthResponse>)> {
    tracing::debug!(target: TRACING_TARGET, "Health status check requested");

    let health = completion
        .health_check()
        .await
        .unwrap_or_else(|error| ServiceHealth::unhealthy(error.to_string()));
    let response = HealthResponse::from(health);

    let status_code = if response.is_operational() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::info!(
        target: TRACING_TARGET,
        status = ?response.status,
        status_code = status_code.as_u16(),
        "Health status response prepared"
    );

    Ok((status_code, Json(response)))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Checks that the completion provider is reachable.")
        .response::<200, Json<HealthResponse>>()
        .response::<503, Json<HealthResponse>>()
}

/// Returns a [`Router`] with all health monitoring routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Health"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use procmap_service::{Error, MockProvider, ServiceStatus};

    use crate::handler::response::HealthResponse;
    use crate::handler::test::create_test_server_with_provider;

    #[tokio::test]
    async fn healthy_provider() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(&MockProvider::new())?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<HealthResponse>();
        assert_eq!(body.status, ServiceStatus::Healthy);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.message.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn response_uses_camel_case() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(&MockProvider::new())?;

        let body = server.get("/health").await.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert!(body.get("checkedAt").is_some());

        Ok(())
    }

    #[tokio::test]
    async fn unhealthy_provider_is_unavailable() -> anyhow::Result<()> {
        let provider = MockProvider::failing(Error::upstream().with_message("connection refused"));
        let server = create_test_server_with_provider(&provider)?;

        let response = server.get("/health").expect_failure().await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body = response.json::<HealthResponse>();
        assert_eq!(body.status, ServiceStatus::Unhealthy);
        assert_eq!(body.message.as_deref(), Some("connection refused"));

        Ok(())
    }
}
