//! Operator-facing cache lifecycle.
//!
//! A [`CacheSession`] holds at most one cache at a time. Selecting a policy
//! constructs a fresh cache (discarding any previous one and all of its
//! metadata); accesses, displays, and simulation runs fail with
//! [`CacheError::Uninitialized`] until a policy has been selected.

use tracing::{info, warn};

use crate::cache::{AccessOutcome, CacheSnapshot, SharedCache};
use crate::common::{Address, CacheError, Result};
use crate::config::{Config, PolicySelection, ReplacementPolicy};
use crate::sim::Simulator;
use crate::stats::{CacheStats, SimulationReport};

/// The operator's view of the simulator.
#[derive(Debug)]
pub struct CacheSession {
    config: Config,
    cache: Option<SharedCache>,
}

impl CacheSession {
    /// Creates a session with no cache selected.
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    /// Creates a session and immediately constructs a cache with the
    /// configured capacity and policy.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when the configuration is invalid.
    pub fn with_cache(config: Config) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(config);
        session.construct(session.config.cache.capacity, session.config.cache.policy)?;
        Ok(session)
    }

    /// Session configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once a policy has been selected.
    pub const fn is_initialized(&self) -> bool {
        self.cache.is_some()
    }

    /// Policy of the current cache, if any.
    pub fn policy(&self) -> Option<ReplacementPolicy> {
        self.cache.as_ref().map(SharedCache::policy)
    }

    /// The current cache, if any.
    pub const fn cache(&self) -> Option<&SharedCache> {
        self.cache.as_ref()
    }

    /// Replaces the current cache with an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when `capacity` is zero; the
    /// existing cache is left untouched in that case.
    pub fn construct(&mut self, capacity: usize, policy: ReplacementPolicy) -> Result<()> {
        let cache = SharedCache::new(capacity, policy)?;
        let _ = self.destroy();
        self.cache = Some(cache);
        Ok(())
    }

    /// Resolves an operator's policy choice and constructs a cache with it.
    ///
    /// An unrecognized choice falls back to LRU; the returned selection
    /// reports the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when the configured capacity is zero.
    pub fn select_policy(&mut self, choice: &str) -> Result<PolicySelection> {
        let selection = ReplacementPolicy::select(choice);
        if selection.fallback {
            warn!(choice, "invalid policy choice, using default LRU cache");
        }
        self.construct(self.config.cache.capacity, selection.policy)?;
        Ok(selection)
    }

    /// Accesses one address.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Uninitialized`] without a cache, or
    /// [`CacheError::AddressOutOfRange`] when `addr` is outside the backing store.
    pub fn access(&self, addr: Address) -> Result<AccessOutcome> {
        let cache = self.require()?;
        let memory_size = self.config.simulation.memory_size;
        if addr >= memory_size {
            return Err(CacheError::AddressOutOfRange {
                address: addr,
                memory_size,
            });
        }
        Ok(cache.access(addr))
    }

    /// Consistent snapshot of the current cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Uninitialized`] without a cache.
    pub fn display(&self) -> Result<CacheSnapshot> {
        Ok(self.require()?.snapshot())
    }

    /// Runs the configured concurrent simulation against the current cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Uninitialized`] without a cache, or
    /// [`CacheError::InvalidConfig`] for an unusable simulation config.
    pub fn simulate(&self) -> Result<SimulationReport> {
        let cache = self.require()?;
        Simulator::new(self.config.simulation.clone()).run(cache)
    }

    /// Drops the current cache, returning its final counters.
    pub fn destroy(&mut self) -> Option<CacheStats> {
        let cache = self.cache.take()?;
        let stats = cache.stats();
        info!(
            policy = cache.policy().name(),
            accesses = stats.accesses,
            "cache destroyed"
        );
        Some(stats)
    }

    fn require(&self) -> Result<&SharedCache> {
        self.cache.as_ref().ok_or(CacheError::Uninitialized)
    }
}
