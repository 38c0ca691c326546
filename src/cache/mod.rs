//! Cache Module
//!
//! Provides the in-memory response cache: byte payloads keyed by string with
//! TTL eviction performed by a periodic sweep.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
