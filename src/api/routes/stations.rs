//! Station Routes
//!
//! - GET /api/v1/stations - List all stations

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{StationDto, StationListResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/stations
///
/// List all stations in the dataset, ordered by station id. Has no date
/// dependency.
pub async fn list_stations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StationListResponse>> {
    let stations: Vec<StationDto> = state
        .engine
        .list_stations()?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(StationListResponse {
        total: stations.len(),
        stations,
    }))
}
