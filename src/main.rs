//! Pokedex - An interactive PokeAPI explorer
//!
//! Network responses are kept in a time-expiring in-memory cache whose
//! background reaper drops entries once they outlive the configured TTL.

use std::io;

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, PokeApiClient, Repl, TimedCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the PokeAPI client around the cache
/// 5. Run the command loop on stdin until `exit` or EOF
/// 6. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, api_base_url={}, http_timeout={}s",
        config.cache_ttl, config.api_base_url, config.http_timeout
    );

    let cache = TimedCache::new(config.cache_ttl()).context("failed to create response cache")?;
    debug!("Response cache initialized");

    let client =
        PokeApiClient::from_config(&config, cache.clone()).context("failed to build HTTP client")?;

    let mut repl = Repl::new(client, io::stdout(), StdRng::from_entropy());
    let result = repl.run(BufReader::new(tokio::io::stdin())).await;

    cache.shutdown().await;
    debug!("Reaper stopped");

    result
}
