//! # hilo
//!
//! Read-only climate query service over a fixed historical daily-observation
//! dataset (precipitation and temperature readings tied to weather stations
//! and calendar dates).
//!
//! ## Features
//!
//! - **Window resolution**: explicit, open-ended, and trailing-12-month date
//!   windows anchored on the dataset's latest date (never wall-clock time)
//! - **Aggregation**: field listings with absent readings excluded, and
//!   min/avg/max temperature summaries
//! - **Injected store**: the core talks to the dataset through a trait;
//!   SQLite backend included
//! - **REST API**: JSON endpoints with Axum
//!
//! ## Modules
//!
//! - [`query`]: Date-window resolution and aggregation engine
//! - [`store`]: Read-only observation store (trait + SQLite implementation)
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hilo::query::{ClimateEngine, DateWindow, Field};
//! use hilo::store::SqliteStore;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Open the snapshot once at process start
//!     let store = Arc::new(SqliteStore::open(Path::new("climate.sqlite"))?);
//!     let engine = ClimateEngine::new(store);
//!
//!     // Trailing 12 months of precipitation
//!     let window = DateWindow::trailing_year(engine.latest_date()?);
//!     let readings = engine.list_field(&window, Field::Precipitation)?;
//!
//!     println!("Found {} precipitation readings", readings.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod query;
pub mod store;

// Re-export top-level types for convenience
pub use query::{
    ClimateEngine, DateWindow, Field, FieldReading, QueryError, QueryResult, TemperatureSummary,
};

pub use store::{Observation, ObservationStore, SqliteStore, Station, StoreError, StoreResult};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, ApiConfig as ConfigApiConfig, LoggingConfig, StoreConfig,
};
