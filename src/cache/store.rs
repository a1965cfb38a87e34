//! Cache Store Module
//!
//! The key to entry map guarded by [`TimedCache`](crate::cache::TimedCache).
//! Everything here is synchronous; locking is the caller's job.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats, Payload};

// == Cache Store ==
/// Key to payload storage with a single, fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lifetime of every entry, fixed at construction
    ttl: Duration,
    /// Hit/miss and sweep counters
    stats: StatsRecorder,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: StatsRecorder::default(),
        }
    }

    /// Configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Replacement always resets the entry's age, fresh or not.
    pub fn put(&mut self, key: String, payload: Payload) {
        self.entries.insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Looks up `key` by membership, so an empty payload is still a hit.
    ///
    /// No age check happens here; stale entries stay visible until the
    /// reaper's next sweep removes them.
    pub fn get(&self, key: &str) -> Option<Payload> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.payload())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep Expired ==
    /// Removes every entry older than the TTL in a single pass.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    fn sweep_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Returns true if `key` currently has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
