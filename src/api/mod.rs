//! API Module
//!
//! Read-through client for the PokeAPI, backed by the timed cache.
//!
//! # Endpoints used
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Details of a single pokemon

pub mod client;

pub use client::PokeApiClient;
