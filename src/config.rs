//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of cached responses, and the reaper's sweep interval, in seconds
    pub cache_ttl: u64,
    /// Base URL of the PokeAPI
    pub api_base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 30)
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 30,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
    }

    // Single test touching the environment so parallel tests can't race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("POKEDEX_HTTP_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.http_timeout, 10);

        env::set_var("POKEDEX_CACHE_TTL", "5");
        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/");
        env::set_var("POKEDEX_HTTP_TIMEOUT", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 5);
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.http_timeout, 10);

        env::remove_var("POKEDEX_CACHE_TTL");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("POKEDEX_HTTP_TIMEOUT");
    }
}
