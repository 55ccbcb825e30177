//! Error definitions.
//!
//! Every failure the simulator can report is recovered at the operator
//! boundary: none of them leave the cache in a partially mutated state.
//! Slot lookup, eviction, and admission are total and have no error path.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::addr::Address;

/// Errors reported by the cache session, configuration, and simulator.
#[derive(Debug, Error)]
pub enum CacheError {
    /// An access, display, or simulation was requested before any policy was selected.
    #[error("cache is not initialized; select a replacement policy first")]
    Uninitialized,

    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A manual access named an address outside the backing store.
    #[error("address {address} is outside the backing store [0, {memory_size})")]
    AddressOutOfRange {
        /// The rejected address.
        address: Address,
        /// Size of the address universe.
        memory_size: u64,
    },

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A configuration document could not be deserialized.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias carrying [`CacheError`].
pub type Result<T> = std::result::Result<T, CacheError>;
