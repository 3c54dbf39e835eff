//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all stub handlers
//! - Wire up middleware (tracing, request timeout)
//! - Inject the shared store, project directory and clock into handlers
//! - Serve with graceful shutdown (Ctrl+C or programmatic trigger)

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::StubConfig;
use crate::enrichment::clock::{Clock, SystemClock};
use crate::enrichment::handlers as enrichment;
use crate::enrichment::store::EnrichmentStore;
use crate::projects::directory::ProjectDirectory;
use crate::projects::handlers as projects;

/// Application state injected into handlers.
///
/// Everything mutable lives behind `Arc`s built at startup; handlers never
/// touch globals, so tests can run multiple isolated servers in one process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EnrichmentStore>,
    pub projects: Arc<ProjectDirectory>,
    pub phenotype: String,
}

/// HTTP server for the hypothesis stub.
pub struct HttpServer {
    router: Router,
    config: StubConfig,
}

impl HttpServer {
    /// Create a server with the production clock.
    pub fn new(config: StubConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server with an injected clock. Tests pass a `ManualClock`
    /// here to step through the status transition without sleeping.
    pub fn with_clock(config: StubConfig, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(EnrichmentStore::new(
            clock,
            config.enrichment.processing_delay(),
            config.enrichment.default_variant.clone(),
        ));

        let state = AppState {
            store,
            projects: Arc::new(ProjectDirectory::new()),
            phenotype: config.enrichment.phenotype.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &StubConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/mock/hypothesis/enrich",
                get(enrichment::enrichment_results).post(enrichment::submit_enrichment),
            )
            .route(
                "/api/mock/hypothesis/hypothesis",
                get(enrichment::hypothesis_status).post(enrichment::finalize_hypothesis),
            )
            .route("/api/mock/hypothesis/projects", get(projects::list_or_get))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl+C or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            processing_delay_secs = self.config.enrichment.processing_delay_secs,
            "Mock hypothesis server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("Mock hypothesis server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or a programmatic shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
