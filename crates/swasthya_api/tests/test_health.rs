//! Liveness payload tests for the banner and health endpoints.

use serde_json::json;
use swasthya_api::health::{HealthStatus, SERVICE_NAME, ServiceBanner};

#[test]
fn test_banner_serializes_name_and_status() {
    let banner = serde_json::to_value(ServiceBanner::live()).unwrap();
    assert_eq!(
        banner,
        json!({"name": SERVICE_NAME, "status": "ok"}),
        "banner MUST carry name and status"
    );
}

#[test]
fn test_health_serializes_status_ok() {
    let health = serde_json::to_value(HealthStatus::ok()).unwrap();
    assert_eq!(health, json!({"status": "ok"}));
}
