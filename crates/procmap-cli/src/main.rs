#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use axum::Router;
use procmap_server::handler::routes;
use procmap_server::middleware::{
    RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt, SecurityHeadersConfig,
};
use procmap_server::service::ServiceState;

use crate::config::{Cli, create_completion_service};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "procmap_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "procmap_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "procmap_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "Application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %format!("{error:#}"),
            "Application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    cli.log();
    cli.validate()?;

    let completion = create_completion_service(&cli)?;
    let state = ServiceState::new(completion);
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, security headers, compression, body limit
/// 4. Routes (innermost) - the JSON API, OpenAPI docs and static front-end
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    let middleware = &cli.middleware;

    routes(middleware.openapi.clone(), &cli.service)
        .with_state(state)
        .with_security(&middleware.cors, &SecurityHeadersConfig::default())
        .with_observability()
        .with_recovery(&middleware.recovery)
}
