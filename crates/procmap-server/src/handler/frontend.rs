//! Static front-end routes.

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::service::{ServiceConfig, ServiceState};

/// Tracing target for static asset routes.
const TRACING_TARGET: &str = "procmap_server::handler::frontend";

/// Returns a [`Router`] serving `index.html` at `/` and the rest of the
/// static directory under `/static`.
///
/// These routes are not part of the OpenAPI document.
pub fn routes(config: &ServiceConfig) -> Router<ServiceState> {
    if !config.has_index_file() {
        tracing::warn!(
            target: TRACING_TARGET,
            index_file = %config.index_file().display(),
            "Front-end page not found, GET / will answer 404"
        );
    }

    Router::new()
        .route_service("/", ServeFile::new(config.index_file()))
        .nest_service("/static", ServeDir::new(config.static_dir()))
}
