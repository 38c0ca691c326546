//! API Module
//!
//! Cached client for the PokeAPI.
//!
//! # Endpoints used
//! - `GET /location-area` - Paginated location listing (cached by URL)
//! - `GET /location-area/{name}` - Location details (cached by URL)
//! - `GET /pokemon/{name}` - Pokemon details (always live, gates a catch)

pub mod capture;
pub mod client;
pub mod session;

pub use capture::{capture_key, catch_chance, CAPTURE_PREFIX};
pub use client::PokeApiClient;
pub use session::{Direction, Session};
