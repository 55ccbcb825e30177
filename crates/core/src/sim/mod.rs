//! Simulation drivers.
//!
//! Provides the synthetic address generators and the concurrent access
//! simulator that fans workers out over one shared cache and joins them.

/// Address generators feeding simulation workers.
pub mod source;

/// Concurrent access simulator.
pub mod simulator;

pub use simulator::Simulator;
pub use source::{AddressSource, ScriptedAddresses, UniformAddresses};
