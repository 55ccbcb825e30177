//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the resident address with the fewest accesses since it
//! was admitted. Candidates are scanned in slot order and the first minimum
//! wins, so ties always resolve to the lowest slot position.
//!
//! Counts live only while an address is resident: eviction drops the entry
//! and re-admission starts again from 1.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - hit: O(C) residency check, O(1) count update
//!   - miss: O(C) victim scan
//! - **Space Complexity:** O(C)
//! - **Best Case:** Skewed workloads with a stable hot set
//! - **Worst Case:** Shifting hot sets (stale high counts pin old addresses)

use std::collections::HashMap;

use super::ReplacementPolicy;
use crate::cache::table::CacheLineTable;
use crate::cache::{AccessOutcome, PolicyMetadata};
use crate::common::Address;

/// LFU Policy state.
#[derive(Debug, Clone)]
pub struct LfuPolicy {
    /// Table capacity.
    capacity: usize,
    /// Access count of every resident address.
    counts: HashMap<Address, u64>,
}

impl LfuPolicy {
    /// Creates a new LFU policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of slots in the managed table.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Access count of `addr`, or `None` if it is not resident.
    pub fn frequency(&self, addr: Address) -> Option<u64> {
        self.counts.get(&addr).copied()
    }

    /// Picks the eviction victim: lowest count, lowest slot on ties.
    fn victim(&self, table: &CacheLineTable) -> Option<(usize, Address)> {
        // min_by_key keeps the first of equal minima.
        table
            .resident()
            .min_by_key(|(_, addr)| self.counts.get(addr).copied().unwrap_or(0))
    }
}

impl ReplacementPolicy for LfuPolicy {
    /// Bumps the count of a resident address, or admits a new one with
    /// count 1, evicting the least frequently used address when full.
    fn access(&mut self, table: &mut CacheLineTable, addr: Address) -> AccessOutcome {
        if table.contains(addr) {
            *self.counts.entry(addr).or_insert(0) += 1;
            return AccessOutcome::Hit;
        }

        let mut evicted = None;
        if self.counts.len() < self.capacity {
            if let Some(pos) = table.first_empty() {
                table.fill(pos, addr);
            }
        } else if let Some((pos, victim)) = self.victim(table) {
            let _ = self.counts.remove(&victim);
            table.fill(pos, addr);
            evicted = Some(victim);
        }
        let _ = self.counts.insert(addr, 1);

        AccessOutcome::Miss { evicted }
    }

    fn resident(&self) -> usize {
        self.counts.len()
    }

    fn metadata(&self, table: &CacheLineTable) -> PolicyMetadata {
        PolicyMetadata::Frequency(
            table
                .resident()
                .map(|(_, addr)| (addr, self.frequency(addr).unwrap_or(0)))
                .collect(),
        )
    }
}
