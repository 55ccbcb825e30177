//! Fixed-capacity cache with pluggable replacement.
//!
//! This module implements the cache core. It provides:
//! 1. **Slot table:** [`CacheLineTable`], the fixed-size sequence of slots.
//! 2. **Policies:** LRU and LFU engines behind a closed [`PolicyEngine`] enum.
//! 3. **Cache:** [`Cache`], the single-threaded pairing of table, engine, and statistics.
//! 4. **Coordinator:** [`SharedCache`], which serializes concurrent callers behind one lock.
//!
//! The slot table and policy metadata are mutated only through
//! [`Cache::access`]; snapshots copy them out under the same lock.

/// Cache replacement policy implementations (LRU, LFU).
pub mod policies;

/// Locked cache handle shared between threads.
pub mod shared;

/// Fixed-size slot table.
pub mod table;

use std::collections::BTreeSet;
use std::fmt;

use self::policies::{PolicyEngine, ReplacementPolicy};
pub use self::shared::SharedCache;
pub use self::table::CacheLineTable;
use crate::common::{Address, CacheError, Result, Slot};
use crate::config::ReplacementPolicy as PolicyType;
use crate::stats::CacheStats;

/// Hit/miss classification of a single access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The address was already resident.
    Hit,
    /// The address was admitted; `evicted` names the address it displaced.
    Miss {
        /// Address removed to make room, if the cache was full.
        evicted: Option<Address>,
    },
}

impl AccessOutcome {
    /// Returns `true` for a hit.
    #[inline]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// The evicted address, if this access caused an eviction.
    #[inline]
    pub const fn evicted(self) -> Option<Address> {
        match self {
            Self::Miss { evicted } => evicted,
            Self::Hit => None,
        }
    }
}

/// Policy-specific metadata copied out of an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyMetadata {
    /// LRU recency order, least recently used first.
    Recency(Vec<Address>),
    /// LFU access counts in slot order.
    Frequency(Vec<(Address, u64)>),
}

/// Point-in-time copy of a cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheSnapshot {
    /// Active replacement policy.
    pub policy: PolicyType,
    /// Every slot, in position order.
    pub slots: Vec<Slot>,
    /// Policy metadata at the same instant.
    pub metadata: PolicyMetadata,
    /// Counters at the same instant.
    pub stats: CacheStats,
}

impl CacheSnapshot {
    /// Resident addresses in slot order.
    pub fn resident(&self) -> Vec<Address> {
        self.slots.iter().filter_map(|slot| slot.address()).collect()
    }

    /// Resident addresses as a set.
    pub fn resident_set(&self) -> BTreeSet<Address> {
        self.slots.iter().filter_map(|slot| slot.address()).collect()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// LFU access count of `addr`; `None` under LRU or when not resident.
    pub fn frequency(&self, addr: Address) -> Option<u64> {
        match &self.metadata {
            PolicyMetadata::Frequency(counts) => counts
                .iter()
                .find_map(|&(a, count)| (a == addr).then_some(count)),
            PolicyMetadata::Recency(_) => None,
        }
    }

    /// LRU recency order, least recently used first; `None` under LFU.
    pub fn recency(&self) -> Option<&[Address]> {
        match &self.metadata {
            PolicyMetadata::Recency(order) => Some(order.as_slice()),
            PolicyMetadata::Frequency(_) => None,
        }
    }

    /// Checks the structural invariants: no address in two slots, and the
    /// policy metadata tracks exactly the occupied slots.
    pub fn is_consistent(&self) -> bool {
        let resident = self.resident();
        let set = self.resident_set();
        if set.len() != resident.len() {
            return false;
        }
        match &self.metadata {
            PolicyMetadata::Recency(order) => {
                order.len() == set.len() && order.iter().copied().collect::<BTreeSet<_>>() == set
            }
            PolicyMetadata::Frequency(counts) => {
                counts.len() == set.len()
                    && counts.iter().all(|&(addr, count)| count > 0 && set.contains(&addr))
            }
        }
    }
}

impl fmt::Display for CacheSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current Cache ({}):", self.policy.name())?;
        for slot in &self.slots {
            write!(f, " {slot}")?;
        }
        Ok(())
    }
}

/// A cache line table paired with the replacement engine that owns it.
///
/// Not synchronized; wrap it in [`SharedCache`] to share between threads.
#[derive(Debug, Clone)]
pub struct Cache {
    table: CacheLineTable,
    engine: PolicyEngine,
    stats: CacheStats,
}

impl Cache {
    /// Creates an empty cache of `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when `capacity` is zero.
    pub fn new(capacity: usize, policy: PolicyType) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "cache capacity must be greater than zero".into(),
            ));
        }
        Ok(Self {
            table: CacheLineTable::new(capacity),
            engine: PolicyEngine::new(policy, capacity),
            stats: CacheStats::default(),
        })
    }

    /// Performs one access and records it in the statistics.
    pub fn access(&mut self, addr: Address) -> AccessOutcome {
        let outcome = self.engine.access(&mut self.table, addr);
        self.stats.record(outcome);
        outcome
    }

    /// Copies out the slots, policy metadata, and counters.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            policy: self.engine.kind(),
            slots: self.table.slots().to_vec(),
            metadata: self.engine.metadata(&self.table),
            stats: self.stats.clone(),
        }
    }

    /// Active replacement policy.
    pub const fn policy(&self) -> PolicyType {
        self.engine.kind()
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of resident addresses.
    pub fn len(&self) -> usize {
        self.engine.resident()
    }

    /// Returns `true` if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Counters accumulated since construction.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
