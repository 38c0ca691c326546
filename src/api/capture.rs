//! Capture Rules
//!
//! Catch probability and the cache namespace that holds caught pokemon.

/// Key prefix reserving a slice of the response cache for the pokedex.
pub const CAPTURE_PREFIX: &str = "pokedex/";

/// Floor on the catch chance, in percent.
pub const MIN_CATCH_CHANCE: u32 = 10;

/// Catch chance when the difficulty score is missing or zero, in percent.
pub const DEFAULT_CATCH_CHANCE: u32 = 50;

/// Upper bound (exclusive) of a catch roll.
pub const ROLL_RANGE: u32 = 100;

/// Cache key under which a caught pokemon is stored.
pub fn capture_key(name: &str) -> String {
    format!("{}{}", CAPTURE_PREFIX, name)
}

/// Chance in percent of catching a pokemon with the given base experience.
///
/// Each 4 points of base experience cost one percent, never going below
/// [`MIN_CATCH_CHANCE`].
pub fn catch_chance(base_experience: Option<u32>) -> u32 {
    match base_experience {
        Some(exp) if exp > 0 => 100u32.saturating_sub(exp / 4).max(MIN_CATCH_CHANCE),
        _ => DEFAULT_CATCH_CHANCE,
    }
}

/// Whether `roll` (in `0..ROLL_RANGE`) catches a pokemon with the given chance.
pub fn is_caught(roll: u32, chance: u32) -> bool {
    roll < chance
}
