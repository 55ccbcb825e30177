//! Address generators.
//!
//! Workers pull addresses from an [`AddressSource`]. The default source draws
//! uniformly from `[0, memory_size)`; a scripted source replays a fixed trace
//! for reproducible runs.

use rand::SeedableRng;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;

use crate::common::{Address, CacheError, Result};

/// A stream of addresses for one worker.
pub trait AddressSource {
    /// Produces the next address to access.
    fn next_address(&mut self) -> Address;
}

/// Uniformly distributed addresses over `[0, memory_size)`.
#[derive(Debug, Clone)]
pub struct UniformAddresses {
    rng: StdRng,
    dist: Uniform<Address>,
}

impl UniformAddresses {
    /// Creates a generator over `[0, memory_size)`.
    ///
    /// With a `seed` the stream is reproducible; otherwise it is seeded from
    /// OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when `memory_size` is zero.
    pub fn new(memory_size: u64, seed: Option<u64>) -> Result<Self> {
        if memory_size == 0 {
            return Err(CacheError::InvalidConfig(
                "memory size must be greater than zero".into(),
            ));
        }
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Ok(Self {
            rng,
            dist: Uniform::new(0, memory_size),
        })
    }
}

impl AddressSource for UniformAddresses {
    fn next_address(&mut self) -> Address {
        self.dist.sample(&mut self.rng)
    }
}

/// Replays a fixed address trace, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedAddresses {
    trace: Vec<Address>,
    pos: usize,
}

impl ScriptedAddresses {
    /// Creates a source replaying `trace`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`] when `trace` is empty.
    pub fn new(trace: Vec<Address>) -> Result<Self> {
        if trace.is_empty() {
            return Err(CacheError::InvalidConfig(
                "address trace must not be empty".into(),
            ));
        }
        Ok(Self { trace, pos: 0 })
    }
}

impl AddressSource for ScriptedAddresses {
    fn next_address(&mut self) -> Address {
        let addr = self.trace[self.pos];
        self.pos = (self.pos + 1) % self.trace.len();
        addr
    }
}
