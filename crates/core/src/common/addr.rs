//! Address and slot types.
//!
//! The cache stores presence only: an address names a unit of backing memory
//! in `[0, memory_size)` and carries no payload. A slot is a single position
//! of the cache line table and is either empty or holds one address.

use std::fmt;

/// An address in the backing store.
pub type Address = u64;

/// One cell of the cache line table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No address resident in this position.
    #[default]
    Empty,
    /// The position holds the given address.
    Occupied(Address),
}

impl Slot {
    /// Returns the resident address, if any.
    #[inline]
    pub const fn address(self) -> Option<Address> {
        match self {
            Self::Occupied(addr) => Some(addr),
            Self::Empty => None,
        }
    }

    /// Returns `true` if the slot holds no address.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the slot holds exactly `addr`.
    #[inline]
    pub const fn holds(self, addr: Address) -> bool {
        matches!(self, Self::Occupied(a) if a == addr)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Occupied(addr) => write!(f, "{addr}"),
        }
    }
}
