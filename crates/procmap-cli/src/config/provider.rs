//! Completion provider construction.

use anyhow::Context;
use procmap_openai::OpenAiClient;
use procmap_service::CompletionService;

use super::Cli;

/// Creates the completion service backed by the configured OpenAI-compatible API.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be initialized.
pub fn create_completion_service(cli: &Cli) -> anyhow::Result<CompletionService> {
    let client =
        OpenAiClient::new(cli.openai.clone()).context("failed to create OpenAI client")?;
    Ok(client.into_service(cli.completion.clone()))
}
