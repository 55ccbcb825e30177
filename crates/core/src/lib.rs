//! Concurrent cache replacement simulator library.
//!
//! This crate models a fixed-capacity cache sitting in front of a larger
//! backing store and drives it from several threads at once. It provides:
//! 1. **Cache:** The slot table, the LRU and LFU replacement policies, and the locked shared handle.
//! 2. **Simulation:** A fan-out/fan-in driver running independent workers against one cache.
//! 3. **Session:** The operator-facing lifecycle (construct, access, display, destroy).
//! 4. **Configuration:** Defaults, JSON loading, and validation.
//! 5. **Statistics:** Hit/miss accounting for caches and simulation runs.

/// Common types (addresses, slots, errors).
pub mod common;
/// Simulator configuration (defaults, policy enum, JSON loading).
pub mod config;
/// Cache line table, replacement policies, and the access coordinator.
pub mod cache;
/// Operator-facing cache lifecycle.
pub mod session;
/// Address generation and the concurrent access simulator.
pub mod sim;
/// Hit/miss statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load it from JSON.
pub use crate::config::Config;
/// Thread-safe cache handle shared between workers.
pub use crate::cache::SharedCache;
/// Error type and result alias used across the crate.
pub use crate::common::{CacheError, Result};
/// Operator-facing cache lifecycle.
pub use crate::session::CacheSession;
/// Concurrent access driver.
pub use crate::sim::Simulator;
