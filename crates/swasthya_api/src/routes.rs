//! Router and request handlers.
//!
//! All handlers are stateless; each request is scored in isolation against
//! the immutable rule tables.

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use swasthya_core::{EngineMetrics, evaluate};
use tower_http::cors::{Any, CorsLayer};

use crate::dto::{RiskRequest, RiskResponse};
use crate::health::{HealthStatus, ServiceBanner};
use crate::validate::{ValidationError, validate};

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/calculate-risk", post(calculate_risk))
        .layer(cors)
}

async fn root() -> Json<ServiceBanner> {
    Json(ServiceBanner::live())
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Validate, score, and report one request.
pub async fn calculate_risk(
    Json(request): Json<RiskRequest>,
) -> Result<Json<RiskResponse>, ValidationError> {
    let input = validate(&request)?;

    let mut metrics = EngineMetrics::new();
    let assessment = evaluate(&input, &mut metrics);
    tracing::info!(
        "risk scored score={} level={} reasons={}",
        assessment.score,
        assessment.level.as_str(),
        assessment.reason_codes.len()
    );

    Ok(Json(RiskResponse::from(&assessment)))
}
