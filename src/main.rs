//! Cleanup Gateway - secret-gated trigger for expired-data purges
//!
//! Serves the cleanup trigger endpoint and forwards authorized requests to
//! the hosted data store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cleanup_gateway::api::create_router;
use cleanup_gateway::{spawn_purge_task, AppState, Config, ExpiredDataStore, RestStore};

/// Main entry point for the cleanup gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the data store client
/// 4. Start the optional purge schedule
/// 5. Create Axum router and serve on the configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleanup_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cleanup Gateway");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: store_url={}, purge_function={}, port={}, store_timeout={}s",
        config.store_url, config.purge_function, config.server_port, config.store_timeout
    );

    let store: Arc<dyn ExpiredDataStore> = Arc::new(
        RestStore::from_config(&config).context("Failed to build data store client")?,
    );
    info!("Data store client initialized");

    let purge_handle = config
        .purge_interval
        .map(|secs| spawn_purge_task(store.clone(), secs));
    if purge_handle.is_some() {
        info!("In-process purge schedule started");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let app = create_router(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(purge_handle))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the purge schedule if one is running.
async fn shutdown_signal(purge_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
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
                warn!("Failed to install SIGTERM handler: {}", err);
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

    if let Some(handle) = purge_handle {
        handle.abort();
        warn!("Purge schedule aborted");
    }
}
