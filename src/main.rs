//! RDFizer Cache - lookup service
//!
//! Serves vocabulary class lookups and cached job configurations over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rdfizer_cache::api::create_router;
use rdfizer_cache::datasource::{MemJobRepository, MemRdfStore, Seed};
use rdfizer_cache::{AppState, Config, DatasourceCache};

/// Main entry point for the lookup service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the in-memory collaborators, from the seed file if one is set
/// 4. Create the datasource cache and the Axum router
/// 5. Serve until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rdfizer_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RDFizer cache service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: job_cache_capacity={}, port={}, seed_file={:?}",
        config.job_cache_capacity, config.server_port, config.seed_file
    );

    let (jobs, classes) = match &config.seed_file {
        Some(path) => {
            let seed = Seed::load(path)?;
            info!(
                "Seed loaded: {} job configurations, {} class mappings",
                seed.jobs.len(),
                seed.classes.len()
            );
            seed.into_stores()
        }
        None => (MemJobRepository::new(), MemRdfStore::new()),
    };

    let cache = DatasourceCache::new(Arc::new(classes), Arc::new(jobs), config.job_cache_capacity)
        .context("creating datasource cache")?;
    let app = create_router(AppState::new(cache));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
