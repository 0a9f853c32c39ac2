//! HTTP error types and conversions.

mod http_error;
mod service_error;

pub use http_error::{Error, ErrorKind, Result};
