//! Binary entry point for the mock hypothesis server.
//!
//! Runs on the contract defaults (port 9001, 5 second processing delay)
//! unless a TOML config path is given as the first argument.

use std::path::Path;
use tokio::net::TcpListener;

use mock_hypothesis_server::config::{loader, StubConfig};
use mock_hypothesis_server::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mock_hypothesis_server::observability::logging::init();

    tracing::info!("mock-hypothesis-server v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_config(Path::new(&path))?,
        None => StubConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        processing_delay_secs = config.enrichment.processing_delay_secs,
        default_variant = %config.enrichment.default_variant,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
