//! Internal error types for procmap-openai.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for procmap-openai operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Internal error type for procmap-openai operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The API answered with a non-success status.
    #[error("Completion API returned {status}: {message}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Error message reported by the API, or the raw body.
        message: String,
    },
    /// The response carried no usable choice.
    #[error("Completion API returned no content")]
    EmptyReply,
    /// The client configuration is invalid.
    #[error("Invalid OpenAI configuration: {0}")]
    Config(String),
}

impl From<Error> for procmap_service::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                let message = if e.is_timeout() {
                    "Completion request timed out".to_owned()
                } else if e.is_connect() {
                    "Connection to the completion API failed".to_owned()
                } else {
                    e.to_string()
                };

                procmap_service::Error::upstream()
                    .with_message(message)
                    .with_source(e)
            }
            Error::Serde(e) => procmap_service::Error::upstream()
                .with_message(format!("Could not decode completion response: {e}"))
                .with_source(e),
            Error::Config(message) => procmap_service::Error::configuration().with_message(message),
            other => procmap_service::Error::upstream().with_message(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use procmap_service::ErrorKind;

    use super::*;

    #[test]
    fn status_error_keeps_api_message() {
        let error: procmap_service::Error = Error::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            message: "You exceeded your current quota".to_owned(),
        }
        .into();

        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
        assert!(error.to_string().contains("429"));
        assert!(error.to_string().contains("exceeded your current quota"));
    }

    #[test]
    fn empty_reply_is_upstream_failure() {
        let error: procmap_service::Error = Error::EmptyReply.into();
        assert_eq!(error.kind(), ErrorKind::UpstreamCallFailed);
    }

    #[test]
    fn config_error_is_configuration() {
        let error: procmap_service::Error = Error::Config("bad".to_owned()).into();
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
