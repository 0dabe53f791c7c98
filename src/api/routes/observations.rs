//! Observation Listing Routes
//!
//! Trailing-year listings of the two daily readings.
//!
//! - GET /api/v1/precipitation - Last 12 months of precipitation readings
//! - GET /api/v1/tobs - Last 12 months of temperature observations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::FieldListingResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{DateWindow, Field};

/// GET /api/v1/precipitation
///
/// Precipitation readings over the trailing 12-month window, anchored on
/// the dataset's latest date.
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FieldListingResponse>> {
    list_trailing_year(&state, Field::Precipitation)
}

/// GET /api/v1/tobs
///
/// Temperature observations over the trailing 12-month window.
pub async fn tobs(State(state): State<Arc<AppState>>) -> ApiResult<Json<FieldListingResponse>> {
    list_trailing_year(&state, Field::Temperature)
}

fn list_trailing_year(state: &AppState, field: Field) -> ApiResult<Json<FieldListingResponse>> {
    let latest = state.engine.latest_date()?;
    let window = DateWindow::trailing_year(latest);
    let readings = state.engine.list_field(&window, field)?;

    tracing::debug!(window = %window, count = readings.len(), "Resolved trailing-year listing");

    Ok(Json(FieldListingResponse::new(window, readings)))
}
