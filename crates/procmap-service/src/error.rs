//! Common error type definitions.

use strum::{AsRefStr, Display};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Used as the source of a structured [`Error`] so any underlying failure
/// (transport, JSON decoding, configuration parsing) can be chained.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur while turning a process description
/// into a flowchart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The request did not carry the text or structure to work on.
    MissingInput,
    /// The completion service could not be reached or returned an error.
    UpstreamCallFailed,
    /// The reply contained a payload that could not be decoded.
    ExtractionFailed,
    /// The extracted payload is not a directed graph.
    ValidationFailed,
    /// Provider or service settings are invalid.
    Configuration,
}

/// A structured error type for procmap operations.
#[derive(Debug, Error)]
#[error("{}", message.as_deref().unwrap_or(kind.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new missing input error.
    pub fn missing_input() -> Self {
        Self::new(ErrorKind::MissingInput)
    }

    /// Creates a new upstream call error.
    pub fn upstream() -> Self {
        Self::new(ErrorKind::UpstreamCallFailed)
    }

    /// Creates a new extraction error.
    pub fn extraction() -> Self {
        Self::new(ErrorKind::ExtractionFailed)
    }

    /// Creates a new validation error.
    pub fn validation() -> Self {
        Self::new(ErrorKind::ValidationFailed)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns true if the caller is at fault (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingInput)
    }

    /// Returns true if this error originates from the completion service.
    pub fn is_upstream_error(&self) -> bool {
        matches!(self.kind, ErrorKind::UpstreamCallFailed)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::extraction()
            .with_message(format!("Failed to decode JSON payload: {err}"))
            .with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn display_prefers_message() {
        let error = Error::missing_input().with_message("No text provided");
        assert_eq!(error.to_string(), "No text provided");
    }

    #[test]
    fn display_falls_back_to_kind() {
        let error = Error::validation();
        assert_eq!(error.to_string(), "validation_failed");
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(ErrorKind::MissingInput.as_ref(), "missing_input");
        assert_eq!(ErrorKind::UpstreamCallFailed.as_ref(), "upstream_call_failed");
        assert_eq!(ErrorKind::ExtractionFailed.as_ref(), "extraction_failed");
        assert_eq!(ErrorKind::ValidationFailed.as_ref(), "validation_failed");
    }

    #[test]
    fn json_errors_become_extraction_failures() {
        let err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error = Error::from(err);

        assert_eq!(error.kind(), ErrorKind::ExtractionFailed);
        assert!(error.source().is_some());
        assert!(!error.is_client_error());
    }

    #[test]
    fn only_missing_input_is_client_error() {
        assert!(Error::missing_input().is_client_error());
        assert!(!Error::upstream().is_client_error());
        assert!(Error::upstream().is_upstream_error());
        assert!(!Error::extraction().is_client_error());
    }
}
