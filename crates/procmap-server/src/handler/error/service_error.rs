//! Service error to HTTP error conversion implementation.

use super::http_error::{Error as HttpError, ErrorKind};

/// Tracing target for service error conversions.
const TRACING_TARGET: &str = "procmap_server::handler::service";

impl From<procmap_service::Error> for HttpError<'static> {
    fn from(error: procmap_service::Error) -> Self {
        use procmap_service::ErrorKind as ServiceErrorKind;

        let kind = match error.kind() {
            ServiceErrorKind::MissingInput => ErrorKind::MissingInput,
            ServiceErrorKind::UpstreamCallFailed => ErrorKind::UpstreamCallFailed,
            ServiceErrorKind::ExtractionFailed => ErrorKind::ExtractionFailed,
            ServiceErrorKind::ValidationFailed => ErrorKind::ValidationFailed,
            ServiceErrorKind::Configuration => ErrorKind::InternalServerError,
        };

        if error.is_client_error() {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                error_kind = error.kind().as_ref(),
                "Request rejected"
            );
        } else {
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                error_kind = error.kind().as_ref(),
                "Service operation failed"
            );
        }

        let mut http_error = kind.with_message(error.to_string());
        if let Some(source) = std::error::Error::source(&error) {
            http_error = http_error.with_context(source.to_string());
        }

        http_error
    }
}
