//! Cache Entry Module
//!
//! Defines the immutable record stored for each cached key.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

/// Opaque, immutable response body shared between the cache and its readers.
pub type Payload = Arc<[u8]>;

// == Cache Entry ==
/// A single cached payload stamped with its insertion time.
///
/// Entries are never mutated. Re-inserting a key builds a fresh entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    payload: Payload,
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: Payload) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    /// Returns a shared handle to the payload.
    pub fn payload(&self) -> Payload {
        Arc::clone(&self.payload)
    }

    /// Insertion timestamp.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time elapsed since insertion, as seen at `now`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` at `now`.
    ///
    /// The comparison is strict: an entry whose age equals `ttl` exactly
    /// survives the sweep and is picked up on the following one.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn payload(bytes: &[u8]) -> Payload {
        Arc::from(bytes)
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_fresh_after_creation() {
        let entry = CacheEntry::new(payload(b"body"));

        assert_eq!(&*entry.payload(), b"body");
        assert!(!entry.is_expired_at(Duration::from_secs(5), Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new(payload(b"body"));
        let ttl = Duration::from_secs(5);

        tokio::time::advance(Duration::from_secs(6)).await;

        assert!(entry.is_expired_at(ttl, Instant::now()));
        assert_eq!(entry.age_at(Instant::now()), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(payload(b"body"));
        let ttl = Duration::from_secs(5);

        // Age equal to the TTL is still fresh
        let at_ttl = entry.created_at() + ttl;
        assert!(!entry.is_expired_at(ttl, at_ttl));
        assert!(entry.is_expired_at(ttl, at_ttl + Duration::from_millis(1)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_age_saturates_for_earlier_instant() {
        let entry = CacheEntry::new(payload(b""));
        let before = entry.created_at() - Duration::from_secs(1);

        assert_eq!(entry.age_at(before), Duration::ZERO);
    }

    #[test]
    fn test_payload_handle_shares_bytes() {
        let entry = CacheEntry::new(payload(b"shared"));

        let a = entry.payload();
        let b = entry.payload();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
