//! Purge Schedule Task
//!
//! Optional in-process trigger that asks the store to purge expired records
//! at a fixed interval, alongside the external scheduler.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::store::ExpiredDataStore;

/// Spawns a background task that periodically purges expired records.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between purge calls. A failed purge is logged and the loop continues;
/// the next tick is the only retry.
///
/// # Arguments
/// * `store` - Store that performs the purge
/// * `interval_secs` - Interval in seconds between purge calls
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let handle = spawn_purge_task(store.clone(), 3600);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_purge_task(store: Arc<dyn ExpiredDataStore>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting purge schedule with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            match store.purge_expired().await {
                Ok(()) => info!("Scheduled purge: expired data cleanup completed"),
                Err(err) => error!("Scheduled purge failed: {}", err),
            }
        }
    })
}
