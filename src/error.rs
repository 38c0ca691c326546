//! Error types for the pokedex client
//!
//! Provides unified error handling using thiserror.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the cache, fetcher and API client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// A cached payload no longer decodes into the expected shape
    #[error("Corrupted cache entry for {key}: {source}")]
    CorruptEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage
    #[error("Failed to encode cache entry for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure or undecodable response body
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status
    #[error("Unexpected status {status} from {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The named pokemon is not in the pokedex
    #[error("you haven't caught {0} yet")]
    NotCaught(String),

    /// Invalid caller input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
