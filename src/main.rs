//! hilo API Server
//!
//! Serves the read-only climate query API over a snapshot database.
//!
//! Run with: cargo run -- --db climate.sqlite
//!
//! # Configuration
//!
//! Loaded from a TOML file (see `--config`) with environment overrides:
//! - `HILO_DB_PATH`: Path to the snapshot database
//! - `HILO_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HILO_API_PORT`: Port to listen on (default: 8081)
//! - `HILO_LOG_LEVEL`: Log level (default: info)
//! - `HILO_LOG_FORMAT`: pretty or json (default: pretty)

use anyhow::Context;
use clap::Parser;
use hilo::api::{serve, ApiConfig, AppState};
use hilo::config::{generate_default_config, Config};
use hilo::query::ClimateEngine;
use hilo::store::{ObservationStore, SqliteStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Read-only climate query service
#[derive(Debug, Parser)]
#[command(name = "hilo", version, about)]
struct Args {
    /// Path to a TOML config file (default: standard lookup locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the snapshot database (overrides config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Load configuration, then apply CLI overrides
    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(db) = &args.db {
        config.store.db_path = db.to_string_lossy().to_string();
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config);

    tracing::info!("Starting hilo API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Snapshot database: {}", config.store.db_path);

    // Open the store once at process start; it stays alive until shutdown
    let store = Arc::new(
        SqliteStore::open(Path::new(&config.store.db_path))
            .with_context(|| format!("opening snapshot database {}", config.store.db_path))?,
    );

    // Sanity line: the anchor for trailing and open-ended windows
    match store.max_date() {
        Ok(latest) => tracing::info!("Dataset latest date: {}", latest),
        Err(e) => tracing::warn!("Dataset has no usable latest date: {}", e),
    }

    let engine = Arc::new(ClimateEngine::new(store));

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        request_timeout_secs: config.api.request_timeout_secs,
    };

    let state = AppState::new(engine, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("hilo API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("hilo={},tower_http=info", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
