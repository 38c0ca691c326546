//! Cache Store Module
//!
//! Main cache engine: a single `RwLock`-guarded HashMap of opaque payloads with
//! age-based eviction driven by the sweep task.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::stats::StatsCounters;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Thread-safe TTL cache of byte payloads.
///
/// Every operation takes the lock, does its in-memory work and releases it
/// before returning; nothing here is held across an `.await`. Lookups share the
/// read lock, mutations and the sweep take the write lock.
///
/// `get` never checks age. An entry stays readable until a sweep removes it, so
/// a hit may be up to one `ttl` older than the nominal freshness window.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Hit/miss/eviction counters
    stats: StatsCounters,
    /// Eviction age threshold, also the sweep period
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsCounters::default(),
            ttl,
        }
    }

    /// Returns the configured TTL interval.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Stores `payload` under `key`, replacing any previous entry.
    ///
    /// The entry's insertion time is reset to now.
    pub fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        let entry = CacheEntry::new(payload);
        self.write().insert(key.into(), entry);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = self.read().get(key).map(|entry| entry.payload.clone());

        match payload {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }

        payload
    }

    // == Delete ==
    /// Removes the entry under `key`.
    ///
    /// Returns whether an entry was present. Absent keys are not an error.
    pub fn delete(&self, key: &str) -> bool {
        self.write().remove(key).is_some()
    }

    // == Scan By Prefix ==
    /// Returns the remainder of every key that starts with `prefix`.
    ///
    /// Order is unspecified.
    pub fn scan_prefix(&self, prefix: &str) -> Vec<String> {
        self.read()
            .keys()
            .filter_map(|key| key.strip_prefix(prefix))
            .map(str::to_string)
            .collect()
    }

    // == Sweep Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// Removes every entry whose age at `now` exceeds the TTL.
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let removed = {
            let mut entries = self.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired_at(now, self.ttl));
            before - entries.len()
        };

        self.stats.record_evictions(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A writer can only panic between whole-map operations, so a poisoned lock
    // still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
