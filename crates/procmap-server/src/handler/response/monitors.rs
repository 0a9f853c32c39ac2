//! Health check response types.

use jiff::Timestamp;
use procmap_service::{ServiceHealth, ServiceStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Health of the server and its completion provider.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status reported by the completion provider.
    pub status: ServiceStatus,
    /// Server version.
    pub version: String,
    /// When the check ran.
    pub checked_at: Timestamp,
    /// Details for a degraded or unhealthy provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    /// Returns true unless the provider is unhealthy.
    pub fn is_operational(&self) -> bool {
        !matches!(self.status, ServiceStatus::Unhealthy)
    }
}

impl From<ServiceHealth> for HealthResponse {
    fn from(health: ServiceHealth) -> Self {
        Self {
            status: health.status,
            version: env!("CARGO_PKG_VERSION").to_owned(),
            checked_at: health.checked_at,
            message: health.message,
        }
    }
}
