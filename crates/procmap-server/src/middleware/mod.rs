//! Middleware for `axum::Router` and HTTP request processing.
//!
//! Each concern is an extension trait on [`Router`]:
//!
//! - [`RouterSecurityExt`]: CORS, security headers, compression and body limits
//! - [`RouterObservabilityExt`]: request ids, sensitive headers and tracing
//! - [`RouterRecoveryExt`]: panic catching and request timeouts
//! - [`RouterOpenApiExt`]: OpenAPI document and Scalar UI
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use procmap_server::middleware::{
//!     RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
//! };
//!
//! let app: Router = Router::new()
//!     .with_default_security()
//!     .with_observability()
//!     .with_default_recovery();
//! ```
//!
//! [`Router`]: axum::Router

mod observability;
mod recovery;
mod security;
mod specification;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{
    CorsConfig, DEFAULT_MAX_BODY_SIZE, FrameOptions, ReferrerPolicy, RouterSecurityExt,
    SecurityHeadersConfig,
};
pub use specification::{OpenApiConfig, RouterOpenApiExt};
