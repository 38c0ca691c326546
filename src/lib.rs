//! Pokedex - An interactive PokeAPI client
//!
//! Repeated lookups are served from an in-memory response cache whose entries
//! are evicted by a periodic TTL sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::{Direction, PokeApiClient, Session};
pub use cache::CacheStore;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use fetcher::CachingFetcher;
pub use tasks::{spawn_sweep_task, SweepHandle};
