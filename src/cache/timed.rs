//! Timed Cache Handle
//!
//! The shareable front of the cache: a [`CacheStore`] behind a tokio
//! `RwLock`, paired with the reaper task that expires its entries.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::error;

use crate::cache::{CacheStats, CacheStore, Payload};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper;

// == Timed Cache ==
/// Time-expiring cache of opaque payloads keyed by string.
///
/// Cloning is cheap and every clone shares the same entries. A single TTL
/// is used both as the entry lifetime and as the reaper's sweep interval,
/// so an expired entry can remain readable for up to one extra interval.
///
/// Lookups take a shared lock, inserts and sweeps an exclusive one. No
/// lock is ever held outside these calls, so network I/O done by callers
/// around a miss is never serialized by the cache.
#[derive(Debug, Clone)]
pub struct TimedCache {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    store: Arc<RwLock<CacheStore>>,
    ttl: Duration,
    // Dropping the sender also stops the reaper
    shutdown: watch::Sender<bool>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime. Never waits for the
    /// first sweep.
    ///
    /// # Errors
    /// - [`CacheError::InvalidTtl`] if `ttl` is zero
    /// - [`CacheError::TtlTooLarge`] if `ttl` overflows the reaper's clock
    /// - [`CacheError::NoRuntime`] if there is no runtime to host the reaper
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl);
        }

        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let (shutdown, stopped) = watch::channel(false);
        let reaper = spawn_reaper(Arc::clone(&store), ttl, stopped)?;

        Ok(Self {
            shared: Arc::new(Shared {
                store,
                ttl,
                shutdown,
                reaper: Mutex::new(Some(reaper)),
            }),
        })
    }

    /// Configured TTL.
    pub fn ttl(&self) -> Duration {
        self.shared.ttl
    }

    // == Put ==
    /// Inserts or replaces the payload for `key`, resetting its age.
    pub async fn put(&self, key: impl Into<String>, payload: impl Into<Payload>) {
        let key = key.into();
        let payload = payload.into();
        self.shared.store.write().await.put(key, payload);
    }

    // == Get ==
    /// Returns the payload stored for `key`, if any.
    ///
    /// `Some` with an empty payload is a hit. Staleness is decided only by
    /// the reaper; this never checks the entry's age.
    pub async fn get(&self, key: &str) -> Option<Payload> {
        self.shared.store.read().await.get(key)
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.shared.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.shared.store.read().await.is_empty()
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.shared.store.read().await.stats()
    }

    /// Returns true while the reaper task is alive.
    pub fn is_reaper_running(&self) -> bool {
        self.shared
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Idempotent and visible to every clone. The cache stays usable
    /// afterwards, but entries no longer expire.
    pub async fn shutdown(&self) {
        self.shared.shutdown.send_replace(true);

        let handle = self
            .shared
            .reaper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                error!(%err, "reaper task ended abnormally");
            }
        }
    }
}
