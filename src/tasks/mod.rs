//! Background Tasks Module
//!
//! Contains background tasks that run alongside the cache.
//!
//! # Tasks
//! - TTL Sweep: Evicts expired cache entries once per TTL interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle};
