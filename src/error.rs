//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a [`TimedCache`](crate::cache::TimedCache).
///
/// Reads and writes on a live cache are infallible; these only surface at startup.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL must be strictly positive
    #[error("Invalid TTL: cache entries need a positive time-to-live")]
    InvalidTtl,

    /// TTL so large the reaper's tick deadline cannot be represented
    #[error("TTL too large: {0:?} overflows the clock")]
    TtlTooLarge(std::time::Duration),

    /// No tokio runtime available to drive the reaper
    #[error("No async runtime available for the reaper: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

// == API Error Enum ==
/// Errors raised by the PokeAPI client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Base URL cannot have path segments appended
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Command Error Enum ==
/// Errors raised while parsing a REPL input line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Please enter a valid command.")]
    Empty,

    /// First word is not a registered command
    #[error("Unknown command: '{0}'. Type 'help' for available commands.")]
    Unknown(String),

    /// Command needs an argument that was not given
    #[error("Usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
