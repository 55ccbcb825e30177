//! Access coordinator.
//!
//! Wraps a [`Cache`] in a single exclusive lock so any number of threads can
//! issue accesses and take snapshots. Each access or snapshot runs entirely
//! inside the lock, so a snapshot reflects the cache either fully before or
//! fully after any given access. No fairness is promised between waiters.

use parking_lot::Mutex;
use tracing::{debug, info};

use super::{AccessOutcome, Cache, CacheSnapshot};
use crate::common::{Address, Result};
use crate::config::ReplacementPolicy as PolicyType;
use crate::stats::CacheStats;

/// Thread-safe cache handle.
///
/// The lock belongs to this value, so independent instances never contend
/// with each other.
#[derive(Debug)]
pub struct SharedCache {
    policy: PolicyType,
    capacity: usize,
    inner: Mutex<Cache>,
}

impl SharedCache {
    /// Creates an empty shared cache.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`](crate::CacheError::InvalidConfig)
    /// when `capacity` is zero.
    pub fn new(capacity: usize, policy: PolicyType) -> Result<Self> {
        let cache = Cache::new(capacity, policy)?;
        info!(policy = policy.name(), capacity, "cache constructed");
        Ok(Self {
            policy,
            capacity,
            inner: Mutex::new(cache),
        })
    }

    /// Performs one access under the lock.
    ///
    /// The hit/miss event is emitted while the lock is held, so log order
    /// matches access order. `seq` is the cache's running access count.
    pub fn access(&self, addr: Address) -> AccessOutcome {
        let mut cache = self.inner.lock();
        let outcome = cache.access(addr);
        let seq = cache.stats().accesses;
        match outcome {
            AccessOutcome::Hit => {
                debug!(policy = self.policy.name(), address = addr, seq, "cache hit");
            }
            AccessOutcome::Miss { evicted } => {
                debug!(
                    policy = self.policy.name(),
                    address = addr,
                    evicted = ?evicted,
                    seq,
                    "cache miss, address added"
                );
            }
        }
        drop(cache);
        outcome
    }

    /// Consistent copy of the whole cache, taken under the lock.
    pub fn snapshot(&self) -> CacheSnapshot {
        self.inner.lock().snapshot()
    }

    /// Counters accumulated since construction.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats().clone()
    }

    /// Active replacement policy.
    pub const fn policy(&self) -> PolicyType {
        self.policy
    }

    /// Number of slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the handle, returning the unlocked cache.
    pub fn into_inner(self) -> Cache {
        self.inner.into_inner()
    }
}
