//! Reaper Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Spawns the reaper for `store` on the current tokio runtime.
///
/// Every `interval` the task takes the write lock once and sweeps the
/// whole map under it, so callers never see a half-swept store. The first
/// sweep happens one full interval after spawning.
///
/// The task exits when `shutdown` receives a value or its sender is
/// dropped.
///
/// # Errors
/// - [`CacheError::NoRuntime`] when called outside a tokio runtime
/// - [`CacheError::TtlTooLarge`] when the first two tick deadlines cannot
///   be represented as an [`Instant`]
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
/// let (stop, stopped) = watch::channel(false);
/// let handle = spawn_reaper(store.clone(), ttl, stopped)?;
/// // Later:
/// stop.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_reaper(
    store: Arc<RwLock<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> Result<JoinHandle<()>> {
    let runtime = Handle::try_current()?;

    // The ticker adds `interval` again after every tick
    let start = Instant::now()
        .checked_add(interval)
        .filter(|start| start.checked_add(interval).is_some())
        .ok_or(CacheError::TtlTooLarge(interval))?;

    Ok(runtime.spawn(async move {
        debug!(?interval, "reaper started");

        let mut ticker = interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                // Either a stop request or every cache handle is gone
                _ = shutdown.changed() => break,
            }

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.sweep_expired();
                (removed, guard.len())
            };

            if removed > 0 {
                debug!(removed, remaining, "reaper swept expired entries");
            } else {
                trace!(remaining, "reaper sweep found nothing expired");
            }
        }

        debug!("reaper stopped");
    }))
}
