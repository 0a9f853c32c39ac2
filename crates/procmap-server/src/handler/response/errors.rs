use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schemars::JsonSchema;
use serde::Serialize;

/// HTTP error response body.
///
/// Serialized as `{"name": "<kind>", "error": "<message>"}`. The status code
/// and the internal context never reach the client.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ErrorResponse<'a> {
    /// The error name/type identifier
    pub name: Cow<'a, str>,
    /// Message safe for client display
    #[serde(rename = "error")]
    pub message: Cow<'a, str>,

    /// Internal context for debugging (not exposed to client)
    #[serde(skip)]
    pub context: Option<Cow<'a, str>>,
    /// HTTP status code (not serialized in JSON)
    #[serde(skip)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "bad_request",
        "Invalid request data.",
        StatusCode::BAD_REQUEST,
    );
    // 5xx Server Errors
    pub const EXTRACTION_FAILED: Self = Self::new(
        "extraction_failed",
        "Could not decode the generated output.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "internal_server_error",
        "Internal server error.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_INPUT: Self = Self::new(
        "missing_input",
        "No input provided.",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self = Self::new("not_found", "Not found.", StatusCode::NOT_FOUND);
    pub const PAYLOAD_TOO_LARGE: Self = Self::new(
        "payload_too_large",
        "Request body too large.",
        StatusCode::PAYLOAD_TOO_LARGE,
    );
    pub const UPSTREAM_CALL_FAILED: Self = Self::new(
        "upstream_call_failed",
        "Completion service request failed.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const VALIDATION_FAILED: Self = Self::new(
        "validation_failed",
        "Generated output is not valid DOT.",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(name: &'a str, message: &'a str, status: StatusCode) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
            context: None,
            status,
        }
    }

    /// Replaces the client-facing message.
    pub fn with_message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches context to the error response.
    /// If context already exists, it merges them with a separator.
    pub fn with_context(mut self, context: impl Into<Cow<'a, str>>) -> Self {
        let new_context = context.into();
        self.context = Some(match self.context {
            Some(existing) => Cow::Owned(format!("{}; {}", existing, new_context)),
            None => new_context,
        });
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_error_field_only() -> anyhow::Result<()> {
        let response = ErrorResponse::MISSING_INPUT
            .with_message("No text provided")
            .with_context("hidden");

        let value = serde_json::to_value(&response)?;
        assert_eq!(
            value,
            serde_json::json!({ "name": "missing_input", "error": "No text provided" })
        );

        Ok(())
    }

    #[test]
    fn with_message_replaces_default() {
        let response = ErrorResponse::UPSTREAM_CALL_FAILED.with_message("timed out");
        assert_eq!(response.message, "timed out");
    }

    #[test]
    fn context_is_merged() {
        let response = ErrorResponse::BAD_REQUEST
            .with_context("first")
            .with_context("second");

        assert_eq!(response.context.as_deref(), Some("first; second"));
    }

    #[test]
    fn into_response_keeps_status() {
        let response = ErrorResponse::VALIDATION_FAILED.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
