//! Cache Replacement Policies.
//!
//! Implements the algorithms that decide which resident address leaves the
//! cache when a new one must be admitted into a full table.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used (ties go to the lowest slot position).
//!
//! Both policies fill the lowest-numbered empty slot while the table has
//! room, and overwrite the victim's slot in place once it is full.

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

pub use lfu::LfuPolicy;
pub use lru::LruPolicy;

use super::table::CacheLineTable;
use super::{AccessOutcome, PolicyMetadata};
use crate::common::Address;
use crate::config::ReplacementPolicy as PolicyType;

/// Trait for cache replacement policies.
///
/// A policy owns the metadata for its eviction decision and is the only
/// writer of the slot table it is handed.
pub trait ReplacementPolicy: Send {
    /// Performs one access against `table`.
    ///
    /// # Arguments
    ///
    /// * `table` - The slot table the policy manages.
    /// * `addr` - The address being accessed.
    ///
    /// # Returns
    ///
    /// `Hit` if `addr` was resident, otherwise `Miss` with the evicted address, if any.
    fn access(&mut self, table: &mut CacheLineTable, addr: Address) -> AccessOutcome;

    /// Number of addresses the policy currently tracks as resident.
    fn resident(&self) -> usize;

    /// Copies the policy metadata for inspection.
    fn metadata(&self, table: &CacheLineTable) -> PolicyMetadata;
}

/// Closed set of replacement policy engines.
#[derive(Debug, Clone)]
pub enum PolicyEngine {
    /// Recency-ordered eviction.
    Lru(LruPolicy),
    /// Frequency-counted eviction.
    Lfu(LfuPolicy),
}

impl PolicyEngine {
    /// Creates an empty engine of the given kind for a table of `capacity` slots.
    pub fn new(kind: PolicyType, capacity: usize) -> Self {
        match kind {
            PolicyType::Lru => Self::Lru(LruPolicy::new(capacity)),
            PolicyType::Lfu => Self::Lfu(LfuPolicy::new(capacity)),
        }
    }

    /// Which policy this engine implements.
    pub const fn kind(&self) -> PolicyType {
        match self {
            Self::Lru(_) => PolicyType::Lru,
            Self::Lfu(_) => PolicyType::Lfu,
        }
    }
}

impl ReplacementPolicy for PolicyEngine {
    fn access(&mut self, table: &mut CacheLineTable, addr: Address) -> AccessOutcome {
        match self {
            Self::Lru(policy) => policy.access(table, addr),
            Self::Lfu(policy) => policy.access(table, addr),
        }
    }

    fn resident(&self) -> usize {
        match self {
            Self::Lru(policy) => policy.resident(),
            Self::Lfu(policy) => policy.resident(),
        }
    }

    fn metadata(&self, table: &CacheLineTable) -> PolicyMetadata {
        match self {
            Self::Lru(policy) => policy.metadata(table),
            Self::Lfu(policy) => policy.metadata(table),
        }
    }
}
