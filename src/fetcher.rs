//! Caching Fetcher
//!
//! Read-through layer between callers and the [`CacheStore`]: on a miss the
//! caller's loader runs and its result is encoded and stored, on a hit the
//! stored payload is decoded instead.

use std::future::Future;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{PokedexError, Result};

/// Read-through cache over a shared [`CacheStore`].
///
/// Payloads are JSON. A stored payload that fails to decode is reported as
/// [`PokedexError::CorruptEntry`] and never papered over with a fresh load.
#[derive(Debug, Clone)]
pub struct CachingFetcher {
    cache: Arc<CacheStore>,
}

impl CachingFetcher {
    pub fn new(cache: Arc<CacheStore>) -> Self {
        Self { cache }
    }

    /// The underlying store.
    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Returns the value cached under `key`, running `loader` on a miss.
    ///
    /// 1. Hit: decode the payload; decode failure is a hard error
    /// 2. Miss: run `loader`, propagating its error unchanged with nothing stored
    /// 3. Encode and store the loaded value, then hand it back as-is
    pub async fn fetch_or_load<T, F, Fut>(&self, key: &str, loader: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(value) = self.load(key)? {
            debug!(key, "Cache hit");
            return Ok(value);
        }

        debug!(key, "Cache miss");
        let value = loader().await?;
        self.store(key, &value)?;

        Ok(value)
    }

    /// Decodes the value cached under `key`, if present.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.cache.get(key) {
            Some(payload) => serde_json::from_slice(&payload)
                .map(Some)
                .map_err(|source| PokedexError::CorruptEntry {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    /// Encodes `value` and stores it under `key`.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_vec(value).map_err(|source| PokedexError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.cache.put(key, payload);

        Ok(())
    }
}
