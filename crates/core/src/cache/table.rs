//! Cache line table.
//!
//! A fixed number of slots, each empty or holding one address. The table is
//! policy-agnostic; replacement policies decide which slot to write and keep
//! their own metadata in step with it.

use crate::common::{Address, Slot};

/// Fixed-size ordered sequence of slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheLineTable {
    slots: Vec<Slot>,
}

impl CacheLineTable {
    /// Creates a table of `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity],
        }
    }

    /// Number of slots, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots in position order.
    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Position of the slot holding `addr`, if resident.
    pub fn position(&self, addr: Address) -> Option<usize> {
        self.slots.iter().position(|slot| slot.holds(addr))
    }

    /// Returns `true` if `addr` occupies some slot.
    pub fn contains(&self, addr: Address) -> bool {
        self.position(addr).is_some()
    }

    /// Position of the lowest-numbered empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_empty())
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Resident addresses with their positions, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = (usize, Address)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(pos, slot)| slot.address().map(|addr| (pos, addr)))
    }

    /// Writes `addr` into slot `pos`, replacing whatever was there.
    ///
    /// `pos` always comes from [`first_empty`](Self::first_empty) or
    /// [`position`](Self::position) on this table.
    #[inline]
    pub(crate) fn fill(&mut self, pos: usize, addr: Address) {
        self.slots[pos] = Slot::Occupied(addr);
    }
}
