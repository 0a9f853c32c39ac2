//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig           # Host, port, shutdown
//! ├── middleware: MiddlewareConfig   # CORS, OpenAPI, request timeout
//! ├── service: ServiceConfig         # Static front-end directory
//! ├── completion: CompletionDefaults # Model and sampling settings
//! └── openai: OpenAiConfig           # API key, base URL, call timeout
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure the provider and the port
//! procmap-cli --openai-api-key sk-... --port 8080
//!
//! # Or via environment variables
//! OPENAI_API_KEY=sk-... PORT=8080 procmap-cli
//! ```

mod middleware;
mod provider;
mod server;

use std::process;

use anyhow::{Context, anyhow};
use clap::Parser;
pub use middleware::MiddlewareConfig;
use procmap_openai::OpenAiConfig;
use procmap_server::service::ServiceConfig;
use procmap_service::CompletionDefaults;
pub use provider::create_completion_service;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
///
/// Combines all configuration groups for the procmap server:
/// - [`ServerConfig`]: Network binding and shutdown
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, OpenAPI, recovery)
/// - [`ServiceConfig`]: Static front-end assets
/// - [`CompletionDefaults`]: Model, temperature and token cap
/// - [`OpenAiConfig`]: Chat completions endpoint and credentials
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "procmap")]
#[command(about = "Turns process descriptions into Graphviz flowcharts")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, OpenAPI, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Static front-end configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,

    /// Completion request settings.
    #[clap(flatten)]
    pub completion: CompletionDefaults,

    /// OpenAI-compatible provider configuration.
    #[clap(flatten)]
    pub openai: OpenAiConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so values from it
    /// act as defaults for every `env` backed option.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::info!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            "Starting procmap server"
        );

        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;
        self.completion
            .validate()
            .map_err(|err| anyhow!(err))
            .context("invalid completion configuration")?;
        self.openai
            .validate()
            .map_err(|err| anyhow!(err))
            .context("invalid OpenAI configuration")?;
        Ok(())
    }

    /// Logs configuration at info level (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            static_dir = %self.service.static_dir().display(),
            has_index = self.service.has_index_file(),
            "Front-end configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            base_url = %self.openai.base_url,
            timeout_secs = self.openai.timeout().as_secs(),
            api_key_set = !self.openai.api_key.trim().is_empty(),
            model = %self.completion.model,
            temperature = self.completion.temperature,
            max_tokens = self.completion.max_tokens,
            "Completion provider configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [cfg!(feature = "dotenv").then_some("dotenv")]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["procmap"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn explicit_arguments_are_parsed() {
        let cli = parse(&[
            "--openai-api-key",
            "sk-test",
            "--port",
            "8080",
            "--openai-model",
            "gpt-4o-mini",
            "--request-timeout",
            "30",
        ]);

        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.openai.api_key, "sk-test");
        assert_eq!(cli.completion.model, "gpt-4o-mini");
        assert_eq!(cli.middleware.recovery.request_timeout, 30);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn default_request_timeout_outlasts_provider_timeout() {
        let cli = parse(&["--openai-api-key", "sk-test"]);
        assert!(cli.middleware.recovery.request_timeout() > cli.openai.timeout());
    }

    #[test]
    fn rejects_invalid_temperature() {
        let cli = parse(&["--openai-api-key", "sk-test", "--openai-temperature", "3.5"]);
        let error = cli.validate().unwrap_err();
        assert!(format!("{error:#}").contains("Temperature"));
    }

    #[test]
    fn rejects_zero_request_timeout() {
        let cli = parse(&["--openai-api-key", "sk-test", "--request-timeout", "0"]);
        let error = cli.validate().unwrap_err();
        assert!(format!("{error:#}").contains("middleware"));
    }

    #[test]
    fn rejects_blank_api_key() {
        let cli = parse(&["--openai-api-key", "   "]);
        let error = cli.validate().unwrap_err();
        assert!(format!("{error:#}").contains("OPENAI_API_KEY"));
    }
}
