//! HTTP server startup with graceful shutdown and lifecycle logging.

mod error;
mod http_server;
mod lifecycle;
mod shutdown;

use axum::Router;
pub use error::{ServerError, ServerResult};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::TRACING_TARGET_SERVER_SHUTDOWN;
use crate::config::ServerConfig;

/// Starts the HTTP server and blocks until it shuts down.
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    let result = serve_http(app, config).await;

    if let Err(error) = &result {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            error_code = error.error_code(),
            recoverable = error.is_recoverable(),
            suggestion = error.suggestion(),
            "Server stopped with error"
        );
    }

    result
}
