//! Worker tracker HTTP service entry point.
//!
//! Loads the YAML configuration (falling back to defaults when no file is
//! present), builds the API router over an empty record store, and serves
//! until interrupted.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use worker_tracker::api::{AppState, create_router};
use worker_tracker::config::AppConfig;
use worker_tracker::error::TrackerError;

const DEFAULT_CONFIG_PATH: &str = "./config/tracker.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = match AppConfig::load(DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(TrackerError::ConfigNotFound { path }) => {
            info!(%path, "No configuration file, using defaults");
            AppConfig::default()
        }
        Err(err) => return Err(err.into()),
    };

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", config.bind_addr))?;

    let state = AppState::new(config);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Worker tracker listening");

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
