//! hilo REST API
//!
//! HTTP API layer for hilo, built with Axum.
//!
//! # Endpoints
//!
//! ## Index
//! - `GET /` - List available routes
//!
//! ## Observations
//! - `GET /api/v1/precipitation` - Last 12 months of precipitation readings
//! - `GET /api/v1/tobs` - Last 12 months of temperature observations
//!
//! ## Stations
//! - `GET /api/v1/stations` - List all stations
//!
//! ## Temperature
//! - `GET /api/v1/temperature/:start` - Min/avg/max from start to latest date
//! - `GET /api/v1/temperature/:start/:end` - Min/avg/max over [start, end]
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use hilo::api::{serve, ApiConfig, AppState};
//! use hilo::query::ClimateEngine;
//! use hilo::store::SqliteStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SqliteStore::open(Path::new("climate.sqlite"))?);
//!     let engine = Arc::new(ClimateEngine::new(store));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(engine, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Observation listings
        .route("/precipitation", get(routes::observations::precipitation))
        .route("/tobs", get(routes::observations::tobs))
        // Station routes
        .route("/stations", get(routes::stations::list_stations))
        // Temperature summary routes
        .route(
            "/temperature/:start",
            get(routes::temperature::summary_open_ended),
        )
        .route(
            "/temperature/:start/:end",
            get(routes::temperature::summary_explicit),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::index::route_index))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("hilo API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("hilo API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ClimateEngine;
    use crate::store::testkit::seed_snapshot;
    use crate::store::SqliteStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    async fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        seed_snapshot(&path);

        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let engine = Arc::new(ClimateEngine::new(store));
        let api_config = ApiConfig::default();

        let state = AppState::new(engine, api_config);
        let router = build_router(state);

        (router, dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_route_index() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["routes"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "/api/v1/stations"));
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _dir) = create_test_app().await;
        let response = get(app.clone(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app.clone(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_reports_latest_date() {
        let (app, _dir) = create_test_app().await;

        let body = json_body(get(app, "/health").await).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["latest_date"], "2017-08-23");
    }

    #[tokio::test]
    async fn test_list_stations() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/stations").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["stations"][0]["id"], "USC00513117");
        assert_eq!(body["stations"][1]["id"], "USC00519397");
    }

    #[tokio::test]
    async fn test_precipitation_trailing_year() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/precipitation").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["window"]["from"], "2016-08-23");
        assert_eq!(body["window"]["to"], "2017-08-23");

        // The fixture row on 2016-08-22 sits outside the window; the rows
        // without a precipitation reading are excluded.
        assert_eq!(body["count"], 4);
        for obs in body["observations"].as_array().unwrap() {
            let date = obs["date"].as_str().unwrap();
            assert!(date >= "2016-08-23" && date <= "2017-08-23");
        }
    }

    #[tokio::test]
    async fn test_tobs_trailing_year() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/tobs").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        // The latest-date row has no temperature and is excluded.
        assert_eq!(body["count"], 4);
    }

    #[tokio::test]
    async fn test_temperature_summary_explicit() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/temperature/2017-01-01/2017-01-03").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["minimum"], 58.0);
        assert_eq!(body["average"], 60.0);
        assert_eq!(body["maximum"], 62.0);
    }

    #[tokio::test]
    async fn test_temperature_summary_open_ended() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/temperature/2017-06-01").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["window"]["to"], "2017-08-23");
    }

    #[tokio::test]
    async fn test_temperature_summary_no_data_window() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/temperature/1990-01-01/1990-12-31").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["minimum"].is_null());
        assert!(body["average"].is_null());
        assert!(body["maximum"].is_null());
    }

    #[tokio::test]
    async fn test_temperature_summary_inverted_range() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/temperature/2020-01-01/2019-01-01").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_RANGE");
    }

    #[tokio::test]
    async fn test_temperature_summary_start_after_latest() {
        let (app, _dir) = create_test_app().await;

        let response = get(app, "/api/v1/temperature/2018-01-01").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "INVALID_RANGE");
    }

    #[tokio::test]
    async fn test_temperature_summary_malformed_date() {
        let (app, _dir) = create_test_app().await;

        let response = get(app.clone(), "/api/v1/temperature/2017-1-1").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "MALFORMED_DATE");

        let response = get(app, "/api/v1/temperature/2017-02-29/2017-03-01").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
