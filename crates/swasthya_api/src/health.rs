//! Liveness payloads for the banner and health endpoints.

use serde::Serialize;

/// Human-facing service name reported by the root banner.
pub const SERVICE_NAME: &str = "SwasthyaSetu AI Risk Engine";

/// Payload for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceBanner {
    pub name: String,
    pub status: String,
}

impl ServiceBanner {
    /// Banner for a live process.
    pub fn live() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            status: "ok".to_string(),
        }
    }
}

/// Payload for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// `{"status": "ok"}` while the process is up.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
