//! Request extractors with error responses in the server's JSON shape.
//!
//! - [`Json`]: drop-in replacement for [`axum::Json`] whose rejections
//!   become [`Error`] responses instead of plain-text bodies.
//!
//! [`Error`]: crate::handler::Error

mod json;

pub use json::Json;
