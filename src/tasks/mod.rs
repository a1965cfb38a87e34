//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of the cache.
//!
//! # Tasks
//! - Reaper: Sweeps expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reaper;
