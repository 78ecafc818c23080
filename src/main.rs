// SPDX-License-Identifier: MIT

//! Bikelog API Server
//!
//! Serves the balance-bike tracker SPA: training lap times, race results,
//! and per-day summary statistics.

use bikelog::{config::Config, db::DataStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Bikelog API");

    // Open the data slot (seeds a fresh dataset if absent or unreadable)
    let store = DataStore::open(&config.data_path)?;
    tracing::info!(path = %config.data_path.display(), "Data store ready");

    // Build shared state and router
    let state = Arc::new(AppState { config, store });
    let app = bikelog::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bikelog=debug".parse().expect("valid directive"))
                .add_directive("info".parse().expect("valid directive")),
        )
        .with(format)
        .init();
}
