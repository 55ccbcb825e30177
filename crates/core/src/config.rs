//! Configuration system for the cache simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (cache capacity, address universe, worker counts).
//! 2. **Structures:** Hierarchical config for the cache and for simulation runs.
//! 3. **Enums:** Replacement policy selection with operator-facing parsing.
//!
//! Configuration is supplied via a JSON document or `Config::default()`; the CLI
//! layers command-line overrides on top.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::common::{CacheError, Result};

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of slots in the cache line table.
    pub const CACHE_SIZE: usize = 16;

    /// Size of the address universe; addresses are drawn from `[0, MEMORY_SIZE)`.
    pub const MEMORY_SIZE: u64 = 32;

    /// Number of concurrent workers in a simulation run.
    pub const NUM_WORKERS: usize = 4;

    /// Accesses issued by each worker in a simulation run.
    pub const NUM_ACCESSES: usize = 10;

    /// Pause between successive accesses of one worker, in milliseconds.
    pub const ACCESS_DELAY_MS: u64 = 100;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which resident address to evict
/// when a new address must be admitted into a full cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the address that was accessed least recently.
    #[default]
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
    /// Least Frequently Used replacement policy.
    ///
    /// Evicts the resident address with the smallest access count; ties go
    /// to the lowest slot position.
    #[serde(alias = "Lfu", alias = "lfu")]
    Lfu,
}

impl ReplacementPolicy {
    /// Short display name used in logs and operator messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
        }
    }

    /// Resolves an operator's policy choice.
    ///
    /// Accepts the menu numbers (`1`, `2`) and the policy names in any case.
    /// Anything else resolves to LRU with `fallback` set, so the caller can
    /// report that the selection was not recognized.
    pub fn select(choice: &str) -> PolicySelection {
        match choice.parse::<Self>() {
            Ok(policy) => PolicySelection {
                policy,
                fallback: false,
            },
            Err(()) => PolicySelection {
                policy: Self::Lru,
                fallback: true,
            },
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "lru" => Ok(Self::Lru),
            "2" | "lfu" => Ok(Self::Lfu),
            _ => Err(()),
        }
    }
}

/// Outcome of resolving an operator's policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicySelection {
    /// The policy that will be used.
    pub policy: ReplacementPolicy,
    /// `true` when the choice was unrecognized and LRU was substituted.
    pub fallback: bool,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim_core::config::{Config, ReplacementPolicy};
///
/// let config = Config::default();
/// assert_eq!(config.cache.capacity, 16);
/// assert_eq!(config.cache.policy, ReplacementPolicy::Lru);
/// assert_eq!(config.simulation.memory_size, 32);
/// ```
///
/// Deserializing from JSON; omitted fields keep their defaults:
///
/// ```
/// use cachesim_core::config::{Config, ReplacementPolicy};
///
/// let json = r#"{
///     "cache": { "capacity": 4, "policy": "LFU" },
///     "simulation": { "workers": 8, "access_delay_ms": 0, "seed": 7 }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.cache.capacity, 4);
/// assert_eq!(config.cache.policy, ReplacementPolicy::Lfu);
/// assert_eq!(config.simulation.workers, 8);
/// assert_eq!(config.simulation.accesses_per_worker, 10);
/// assert_eq!(config.simulation.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Cache geometry and initial policy
    #[serde(default)]
    pub cache: CacheConfig,
    /// Simulation run parameters
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Parse`] for malformed JSON and
    /// [`CacheError::InvalidConfig`] when a value fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`Config::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks that every value is inside its usable range.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "cache.capacity must be greater than zero".into(),
            ));
        }
        if self.simulation.memory_size == 0 {
            return Err(CacheError::InvalidConfig(
                "simulation.memory_size must be greater than zero".into(),
            ));
        }
        if self.simulation.workers == 0 {
            return Err(CacheError::InvalidConfig(
                "simulation.workers must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of slots in the cache line table
    #[serde(default = "CacheConfig::default_capacity")]
    pub capacity: usize,

    /// Replacement policy used when the session starts with a policy preselected
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Returns the default slot count.
    fn default_capacity() -> usize {
        defaults::CACHE_SIZE
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CACHE_SIZE,
            policy: ReplacementPolicy::default(),
        }
    }
}

/// Parameters of one concurrent simulation run.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Size of the address universe
    #[serde(default = "SimulationConfig::default_memory_size")]
    pub memory_size: u64,

    /// Number of concurrent workers
    #[serde(default = "SimulationConfig::default_workers")]
    pub workers: usize,

    /// Accesses issued by each worker
    #[serde(default = "SimulationConfig::default_accesses")]
    pub accesses_per_worker: usize,

    /// Pause between a worker's successive accesses, in milliseconds
    #[serde(default = "SimulationConfig::default_delay")]
    pub access_delay_ms: u64,

    /// Base seed for the address generators; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Returns the default address universe size.
    fn default_memory_size() -> u64 {
        defaults::MEMORY_SIZE
    }

    /// Returns the default worker count.
    fn default_workers() -> usize {
        defaults::NUM_WORKERS
    }

    /// Returns the default number of accesses per worker.
    fn default_accesses() -> usize {
        defaults::NUM_ACCESSES
    }

    /// Returns the default inter-access delay in milliseconds.
    fn default_delay() -> u64 {
        defaults::ACCESS_DELAY_MS
    }

    /// Pause between a worker's successive accesses.
    pub const fn access_delay(&self) -> Duration {
        Duration::from_millis(self.access_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            memory_size: defaults::MEMORY_SIZE,
            workers: defaults::NUM_WORKERS,
            accesses_per_worker: defaults::NUM_ACCESSES,
            access_delay_ms: defaults::ACCESS_DELAY_MS,
            seed: None,
        }
    }
}
