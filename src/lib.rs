//! Pokedex - An interactive PokeAPI explorer
//!
//! Network responses are kept in a time-expiring in-memory cache whose
//! background reaper drops entries once they outlive the configured TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TimedCache;
pub use config::Config;
pub use repl::Repl;
