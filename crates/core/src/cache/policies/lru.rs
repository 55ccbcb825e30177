//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the resident address that has not been accessed for the
//! longest time. It keeps a recency queue with the least recently used address
//! at the front and the most recently used address at the back.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - hit: O(C) where C is the capacity (queue rotation)
//!   - miss: O(C) (empty-slot or victim-slot search)
//! - **Space Complexity:** O(C)
//! - **Best Case:** Workloads with good temporal locality
//! - **Worst Case:** Cyclic scans larger than the cache (thrashing)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::cache::table::CacheLineTable;
use crate::cache::{AccessOutcome, PolicyMetadata};
use crate::common::Address;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// Table capacity.
    capacity: usize,
    /// Resident addresses; front is LRU, back is MRU.
    order: VecDeque<Address>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The number of slots in the managed table.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Resident addresses from least to most recently used.
    pub fn recency(&self) -> impl Iterator<Item = Address> + '_ {
        self.order.iter().copied()
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves a resident address to the MRU end, or admits a new one,
    /// evicting from the LRU end when the table is full.
    fn access(&mut self, table: &mut CacheLineTable, addr: Address) -> AccessOutcome {
        if table.contains(addr) {
            self.order.retain(|&a| a != addr);
            self.order.push_back(addr);
            return AccessOutcome::Hit;
        }

        let mut evicted = None;
        if self.order.len() < self.capacity {
            if let Some(pos) = table.first_empty() {
                table.fill(pos, addr);
            }
        } else if let Some(victim) = self.order.pop_front() {
            if let Some(pos) = table.position(victim) {
                table.fill(pos, addr);
            }
            evicted = Some(victim);
        }
        self.order.push_back(addr);

        AccessOutcome::Miss { evicted }
    }

    fn resident(&self) -> usize {
        self.order.len()
    }

    fn metadata(&self, _table: &CacheLineTable) -> PolicyMetadata {
        PolicyMetadata::Recency(self.recency().collect())
    }
}
