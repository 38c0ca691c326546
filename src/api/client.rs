//! PokeAPI Client
//!
//! reqwest-based client for the PokeAPI with every read routed through the
//! response cache.

use std::sync::Arc;

use rand::Rng;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::capture::{capture_key, catch_chance, is_caught, CAPTURE_PREFIX, ROLL_RANGE};
use super::session::{Direction, Session};
use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::fetcher::CachingFetcher;
use crate::models::{CaughtPokemon, LocationArea, LocationPage, Pokedex, Pokemon};
use crate::tasks::{spawn_sweep_task, SweepHandle};

/// PokeAPI client with a TTL response cache.
///
/// Listings are cached by their exact URL and location details by their
/// resource URL. Caught pokemon live in the same cache under
/// [`CAPTURE_PREFIX`], so they expire with it.
#[derive(Debug)]
pub struct PokeApiClient {
    base_url: String,
    http: Client,
    fetcher: CachingFetcher,
    sweeper: SweepHandle,
}

impl PokeApiClient {
    /// Creates a client with a fresh cache and starts its sweep task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let store = Arc::new(CacheStore::new(config.cache_ttl()));
        Self::with_store(config, store)
    }

    /// Creates a client over an existing cache and starts a sweep task for it.
    pub fn with_store(config: &Config, store: Arc<CacheStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let sweeper = spawn_sweep_task(store.clone());

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            fetcher: CachingFetcher::new(store),
            sweeper,
        })
    }

    /// URL of the first page of the location listing.
    pub fn location_root(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    // == Locations ==
    /// Fetches the next or previous page of location areas.
    ///
    /// The cursor in `session` moves only when the page was obtained.
    pub async fn list_locations(
        &self,
        session: &mut Session,
        direction: Direction,
    ) -> Result<LocationPage> {
        let url = session.resolve(direction, &self.location_root());
        let page: LocationPage = self
            .fetcher
            .fetch_or_load(&url, || self.get_json(&url))
            .await?;

        session.advance(url, &page);
        Ok(page)
    }

    /// Fetches the details of a location area.
    pub async fn explore(&self, area: &str) -> Result<LocationArea> {
        let area = require_name(area, "location area")?;
        let url = format!("{}/location-area/{}", self.base_url, area);

        self.fetcher
            .fetch_or_load(&url, || self.get_json(&url))
            .await
    }

    // == Capture ==
    /// Tries to catch `name` with a random roll.
    pub async fn catch_pokemon(&self, name: &str) -> Result<bool> {
        let roll = rand::thread_rng().gen_range(0..ROLL_RANGE);
        self.catch_pokemon_with_roll(name, roll).await
    }

    /// Tries to catch `name` with a given roll in `0..100`.
    ///
    /// The pokemon is always fetched live, never from the cache. On success it
    /// is written to the pokedex; on failure nothing is stored.
    pub async fn catch_pokemon_with_roll(&self, name: &str, roll: u32) -> Result<bool> {
        let name = require_name(name, "pokemon")?;
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let pokemon: Pokemon = self.get_json(&url).await?;
        let chance = catch_chance(pokemon.base_experience);
        let caught = is_caught(roll, chance);
        debug!(pokemon = name, chance, roll, caught, "Catch attempt");

        if caught {
            self.fetcher
                .store(&capture_key(name), &CaughtPokemon::new(pokemon))?;
        }

        Ok(caught)
    }

    /// Looks up a caught pokemon in the pokedex.
    pub fn inspect_pokemon(&self, name: &str) -> Result<CaughtPokemon> {
        let name = require_name(name, "pokemon")?;
        self.fetcher
            .load(&capture_key(name))?
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))
    }

    /// Lists every caught pokemon, sorted by name.
    ///
    /// Records that cannot be read back are skipped.
    pub fn pokedex(&self) -> Pokedex {
        let mut pokemon: Vec<CaughtPokemon> = self
            .fetcher
            .cache()
            .scan_prefix(CAPTURE_PREFIX)
            .into_iter()
            .filter(|name| !name.is_empty())
            .filter_map(|name| match self.inspect_pokemon(&name) {
                Ok(caught) => Some(caught),
                Err(err) => {
                    warn!("Skipping pokedex entry {}: {}", name, err);
                    None
                }
            })
            .collect();
        pokemon.sort_by(|a, b| a.pokemon.name.cmp(&b.pokemon.name));

        Pokedex { pokemon }
    }

    /// Returns current cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.fetcher.cache().stats()
    }

    /// Stops the cache sweep task.
    pub async fn shutdown(self) {
        self.sweeper.shutdown().await;
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Characters that would change the request path or end it early.
const RESERVED_NAME_CHARS: [char; 4] = ['/', '\\', '?', '#'];

/// Trims a resource name and checks it is a single, non-empty path segment.
fn require_name<'a>(name: &'a str, what: &str) -> Result<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PokedexError::InvalidRequest(format!(
            "{} name cannot be empty",
            what
        )));
    }
    if name == "." || name == ".." || name.contains(RESERVED_NAME_CHARS) {
        return Err(PokedexError::InvalidRequest(format!(
            "{} name '{}' is not a valid name",
            what, name
        )));
    }
    Ok(name)
}
