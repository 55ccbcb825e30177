//! Common types shared by every part of the simulator.
//!
//! 1. **Addresses:** The unit of backing memory the cache tracks.
//! 2. **Slots:** One cell of the cache line table.
//! 3. **Errors:** The crate-wide error enum and result alias.

/// Address and slot definitions.
pub mod addr;

/// Error types.
pub mod error;

pub use addr::{Address, Slot};
pub use error::{CacheError, Result};
