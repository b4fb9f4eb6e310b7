//! Prismo validation API server.
//!
//! Reads configuration from `PRISMO_*` environment variables, loads the
//! effective constraint table, and serves the router from [`prismo_api::app`].

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use prismo_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let port = config.port;
    let state = AppState::from_config(config).context("failed to load constraint table")?;
    let app = prismo_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("prismo-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
