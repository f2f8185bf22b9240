//! Video analytics HTTP server binary.
//!
//! Loads configuration, builds the repository, sets up the HTTP router and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with an empty in-memory repository
//! cargo run --bin va-server
//!
//! # Preload records and listen on another port
//! VA_SEED_FILE=data/videos.json PORT=9000 cargo run --bin va-server
//! ```
//!
//! # Environment Variables
//!
//! - `VA_CONFIG`: Optional TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `VA_BODY_LIMIT_BYTES`: Request body limit (default: 50 MiB)
//! - `VA_MAX_DURATION_SECONDS`: Longest timeline served (default: 7 days)
//! - `VA_SEED_FILE`: JSON array of video records to preload
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use video_analytics::config::ServerConfig;
use video_analytics::db;
use video_analytics::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting video analytics HTTP server");

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    let repository = db::create_repository(config.storage.seed_file.as_deref())?;
    info!("Repository initialized successfully");

    let state = AppState::new(repository)
        .with_body_limit(config.server.body_limit_bytes)
        .with_max_duration(config.server.max_duration_seconds);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
