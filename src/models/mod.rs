//! Response models for the PokeAPI
//!
//! This module defines the serde types decoded from API responses and
//! stored in the response cache. Every type round-trips through JSON
//! unchanged, which is what lets the cache hand back an equal value on a hit.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{CaughtPokemon, Pokedex, Pokemon, PokemonStat, PokemonType};
