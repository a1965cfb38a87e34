//! PokeAPI Client
//!
//! Every request goes through the cache first. Responses are cached
//! verbatim under the URL they were fetched from.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{Payload, TimedCache};
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI with a shared response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
    cache: TimedCache,
}

impl PokeApiClient {
    /// Creates a client for `base_url` using `cache`.
    ///
    /// # Errors
    /// [`ApiError::InvalidBaseUrl`] if `base_url` is not a URL that paths
    /// can be appended to.
    pub fn new(
        base_url: impl Into<String>,
        cache: TimedCache,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let base_url = Url::parse(&raw)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(ApiError::InvalidBaseUrl(raw))?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: TimedCache) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.as_str(), cache, config.http_timeout())
    }

    /// The cache backing this client.
    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        self.resource_url(&["location-area", ""])
    }

    /// URL of the location area called `name`.
    pub fn location_area_url(&self, name: &str) -> String {
        self.resource_url(&["location-area", name])
    }

    /// URL of the pokemon called `name`.
    pub fn pokemon_url(&self, name: &str) -> String {
        self.resource_url(&["pokemon", name])
    }

    // Each segment is percent-encoded, so `/`, `?` and `#` stay inside it
    fn resource_url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the request runs with no cache lock held; only successful
    /// responses are stored.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Payload, ApiError> {
        if let Some(payload) = self.cache.get(url).await {
            debug!(url, bytes = payload.len(), "cache hit");
            return Ok(payload);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        let payload = Payload::from(&body[..]);
        self.cache.put(url, Payload::clone(&payload)).await;
        Ok(payload)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let payload = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage, ApiError> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.first_location_page_url()).await,
        }
    }

    /// Fetches a single location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea, ApiError> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches a single pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
