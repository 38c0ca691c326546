//! Pokemon DTOs
//!
//! Pokemon details as returned by `GET /pokemon/{name}`, plus the records
//! kept in the pokedex once a pokemon is caught.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Response of `GET /pokemon/{name}`, trimmed to the fields the client uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Difficulty score for catching; null for some forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A pokedex record: the pokemon as fetched at catch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    pub fn new(pokemon: Pokemon) -> Self {
        Self {
            pokemon,
            caught_at: Utc::now(),
        }
    }
}

/// Every pokemon caught so far. Order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokedex {
    pub pokemon: Vec<CaughtPokemon>,
}

impl Pokedex {
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }
}
