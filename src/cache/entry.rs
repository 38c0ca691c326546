//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age checks.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload plus its insertion time.
///
/// `created_at` is set once by [`CacheEntry::new`]. Re-inserting a key builds a
/// fresh entry instead of touching the old one.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Vec<u8>,
    /// Insertion time on the tokio clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::created_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit insertion time.
    pub fn created_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still live.
    /// Only an age strictly greater than `ttl` makes it eligible for the sweep.
    pub fn is_expired_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
