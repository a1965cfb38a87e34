//! Cache Module
//!
//! Provides an in-memory response cache with a single TTL and a background
//! reaper that removes expired entries.

mod entry;
mod stats;
mod store;
mod timed;


// Re-export public types
pub use entry::{CacheEntry, Payload};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timed::TimedCache;
