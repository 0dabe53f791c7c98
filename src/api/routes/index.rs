//! Index Route
//!
//! - GET / - List available routes

use axum::Json;

use crate::api::dto::RouteIndexResponse;

/// GET /
///
/// List all available API routes.
pub async fn route_index() -> Json<RouteIndexResponse> {
    Json(RouteIndexResponse {
        routes: vec![
            "/api/v1/precipitation",
            "/api/v1/stations",
            "/api/v1/tobs",
            "/api/v1/temperature/:start",
            "/api/v1/temperature/:start/:end",
            "/health",
        ],
        date_format: "YYYY-MM-DD",
    })
}
