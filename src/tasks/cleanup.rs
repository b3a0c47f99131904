//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from a shared
//! in-memory store.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryStore;

/// Spawns a background task that periodically sweeps expired entries out of
/// the given store.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Expired entries are also dropped lazily on access, so the
/// sweep only bounds how long dead entries linger unobserved.
///
/// # Arguments
/// * `store` - Shared reference to the store to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during shutdown.
pub fn spawn_cleanup_task<V>(
    store: Arc<MemoryStore<V>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.cleanup_expired().await;

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
