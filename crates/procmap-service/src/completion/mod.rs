//! Completion abstractions for chat-style language model APIs.
//!
//! A [`CompletionProvider`] performs one prompt-in, text-out call. The
//! [`CompletionService`] wraps a provider behind an `Arc`, applies the
//! configured [`CompletionDefaults`] and logs every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use procmap_service::completion::{CompletionDefaults, CompletionService};
//!
//! let service = CompletionService::from_provider(my_provider, CompletionDefaults::default());
//! let reply = service.complete_prompt(prompt).await?;
//! ```

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
mod mock;
mod service;

pub mod request;
pub mod response;

#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub use mock::MockProvider;
pub use request::{CompletionDefaults, CompletionRequest};
pub use response::{CompletionResponse, CompletionUsage};
pub use service::CompletionService;

use crate::types::ServiceHealth;
pub use crate::{Error, Result};

/// Tracing target for completion operations.
pub const TRACING_TARGET: &str = "procmap_service::completion";

/// A chat completion backend.
///
/// Implementations map every transport, quota or decoding failure to an
/// [`ErrorKind::UpstreamCallFailed`] error.
///
/// [`ErrorKind::UpstreamCallFailed`]: crate::ErrorKind::UpstreamCallFailed
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the prompt and returns the first choice of the reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;

    /// Perform a health check on the completion backend.
    async fn health_check(&self) -> Result<ServiceHealth>;
}
