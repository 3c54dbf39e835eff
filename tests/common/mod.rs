//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use mock_hypothesis_server::enrichment::clock::Clock;
use mock_hypothesis_server::{HttpServer, Shutdown, StubConfig};

/// Spawn a stub server on an ephemeral loopback port with the production
/// clock. Returns the bound address and a shutdown handle; trigger it at
/// the end of the test.
#[allow(dead_code)]
pub async fn spawn_stub() -> (SocketAddr, Shutdown) {
    spawn_stub_with_clock(Arc::new(
        mock_hypothesis_server::enrichment::SystemClock,
    ))
    .await
}

/// Spawn a stub server with an injected clock (tests pass a `ManualClock`
/// to step across the processing delay without sleeping).
pub async fn spawn_stub_with_clock(clock: Arc<dyn Clock>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_clock(StubConfig::default(), clock);
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
