//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use tracing::{error, info, warn};

use super::auth::verify_cleanup_key;
use crate::config::Config;
use crate::error::Result;
use crate::models::{CleanupResponse, HealthResponse};
use crate::store::ExpiredDataStore;

/// Application state shared across all handlers.
///
/// Both members are read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration
    pub config: Arc<Config>,
    /// Store that performs the purge
    pub store: Arc<dyn ExpiredDataStore>,
}

impl AppState {
    /// Creates a new AppState from a configuration and a store.
    pub fn new(config: Config, store: Arc<dyn ExpiredDataStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

/// Handler for the cleanup trigger
///
/// Checks the `X-Cleanup-Key` header, then runs exactly one purge against
/// the store. Nothing is retried; the scheduler firing again is the retry.
pub async fn cleanup_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CleanupResponse>> {
    if let Err(err) = verify_cleanup_key(&headers, &state.config.cleanup_secret) {
        warn!("Rejected cleanup trigger: invalid or missing cleanup key");
        return Err(err);
    }

    if let Err(err) = state.store.purge_expired().await {
        error!("Expired data cleanup failed: {}", err);
        return Err(err.into());
    }

    info!("Expired data cleanup completed");
    Ok(Json(CleanupResponse::completed()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
