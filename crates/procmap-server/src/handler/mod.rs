//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use procmap_server::handler::routes;
//! use procmap_server::middleware::OpenApiConfig;
//! use procmap_server::service::{ServiceConfig, ServiceState};
//!
//! let state = ServiceState::new(completion_service);
//! let router = routes(OpenApiConfig::default(), &ServiceConfig::default())
//!     .with_state(state);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod extraction;
mod frontend;
mod generate;
mod monitors;
pub mod request;
pub mod response;

use aide::axum::ApiRouter;
use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::ErrorResponse;
use crate::middleware::{OpenApiConfig, RouterOpenApiExt};
use crate::service::{ServiceConfig, ServiceState};

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all documented JSON routes.
pub fn api_routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(generate::routes())
        .merge(extraction::routes())
        .merge(monitors::routes())
}

/// Returns the complete [`Router`]: the JSON API, its OpenAPI document, and
/// the static front-end.
///
/// Unknown paths answer with a `not_found` error body.
pub fn routes(openapi: OpenApiConfig, config: &ServiceConfig) -> Router<ServiceState> {
    api_routes()
        .with_open_api(openapi)
        .merge(frontend::routes(config))
        .fallback(handler)
}

#[cfg(test)]
pub(crate) mod test {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use procmap_service::MockProvider;

    use super::*;

    /// Returns a new [`TestServer`] with the given state and static directory.
    pub fn create_test_server_with_config(
        state: ServiceState,
        config: &ServiceConfig,
    ) -> anyhow::Result<TestServer> {
        let app = routes(OpenApiConfig::default(), config).with_state(state);
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with the given state.
    pub fn create_test_server_with_state(state: ServiceState) -> anyhow::Result<TestServer> {
        create_test_server_with_config(state, &ServiceConfig::default())
    }

    /// Returns a new [`TestServer`] backed by the given mock provider.
    ///
    /// The provider is shared, so the caller can inspect recorded prompts.
    pub fn create_test_server_with_provider(provider: &MockProvider) -> anyhow::Result<TestServer> {
        let state = ServiceState::new(provider.clone().into_service());
        create_test_server_with_state(state)
    }

    #[tokio::test]
    async fn handlers() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(&MockProvider::new())?;
        assert!(server.is_running());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(&MockProvider::new())?;

        let response = server.get("/api/unknown").expect_failure().await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "not_found");

        Ok(())
    }

    #[tokio::test]
    async fn serves_openapi_document() -> anyhow::Result<()> {
        let server = create_test_server_with_provider(&MockProvider::new())?;

        let response = server.get("/api/openapi.json").await;
        response.assert_status_ok();

        let document = response.json::<serde_json::Value>();
        let paths = &document["paths"];
        assert!(paths.get("/api/generate-dot").is_some());
        assert!(paths.get("/api/extract-steps-roles-types").is_some());
        assert!(paths.get("/api/extract-process-structure").is_some());
        assert!(paths.get("/api/generate-dot-from-structure").is_some());
        assert!(paths.get("/health").is_some());

        Ok(())
    }
}
