//! Temperature Summary Routes
//!
//! Min/avg/max temperature over an arbitrary date window. One summary
//! operation parameterized by an optional end date; with no end date the
//! window runs from the start date to the dataset's latest date.
//!
//! - GET /api/v1/temperature/:start - Open-ended summary
//! - GET /api/v1/temperature/:start/:end - Explicit-range summary

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::TemperatureSummaryResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::query::{parse_date, DateWindow};

/// GET /api/v1/temperature/:start
///
/// Temperature summary from `start` to the dataset's latest date.
pub async fn summary_open_ended(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> ApiResult<Json<TemperatureSummaryResponse>> {
    summarize(&state, &start, None)
}

/// GET /api/v1/temperature/:start/:end
///
/// Temperature summary over the explicit `[start, end]` window.
pub async fn summary_explicit(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> ApiResult<Json<TemperatureSummaryResponse>> {
    summarize(&state, &start, Some(&end))
}

fn summarize(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> ApiResult<Json<TemperatureSummaryResponse>> {
    let start = parse_date(start)?;

    let window = match end {
        Some(end) => DateWindow::explicit(start, parse_date(end)?)?,
        None => DateWindow::open_ended(start, state.engine.latest_date()?)?,
    };

    let summary = state.engine.temperature_summary(&window)?;

    tracing::debug!(window = %window, empty = summary.is_empty(), "Computed temperature summary");

    Ok(Json(TemperatureSummaryResponse::new(window, summary)))
}
