//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::query::QueryError;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the store answers queries.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_store(&state) {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with store details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, store_status, latest_date) = match check_store(&state) {
        Ok(latest) => ("healthy", "ok", latest),
        Err(_) => ("unhealthy", "error", None),
    };

    Json(HealthResponse {
        status: status.to_string(),
        store: store_status.to_string(),
        latest_date,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Probe the store with the cheapest meaningful query
///
/// An empty dataset still counts as reachable; only store-access failures
/// mark the service unhealthy.
fn check_store(state: &AppState) -> Result<Option<NaiveDate>, QueryError> {
    match state.engine.latest_date() {
        Ok(latest) => Ok(Some(latest)),
        Err(QueryError::EmptyDataset) => Ok(None),
        Err(e) => Err(e),
    }
}
