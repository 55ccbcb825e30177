//! Concurrent access simulator.
//!
//! Spawns one scoped thread per worker. Each worker issues a bounded number
//! of accesses against the shared cache, pausing between accesses, and the
//! scope joins every worker before the run returns. The cache is the only
//! state the workers share.

use std::thread;
use std::time::Instant;

use tracing::{debug, debug_span, info};

use super::source::{AddressSource, UniformAddresses};
use crate::cache::SharedCache;
use crate::common::Result;
use crate::config::SimulationConfig;
use crate::stats::{SimulationReport, WorkerStats};

/// Drives concurrent workers against one cache.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the given run parameters.
    pub const fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Run parameters.
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs `workers` workers with uniform address generators.
    ///
    /// When a seed is configured, worker `i` uses `seed + i` so every worker
    /// draws a distinct but reproducible stream.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::InvalidConfig`](crate::CacheError::InvalidConfig)
    /// when the memory size is zero.
    pub fn run(&self, cache: &SharedCache) -> Result<SimulationReport> {
        let sources = (0..self.config.workers)
            .map(|worker| {
                let seed = self.config.seed.map(|s| s.wrapping_add(worker as u64));
                UniformAddresses::new(self.config.memory_size, seed)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.run_with_sources(cache, sources))
    }

    /// Runs one worker per source and waits for all of them to finish.
    pub fn run_with_sources<S>(&self, cache: &SharedCache, sources: Vec<S>) -> SimulationReport
    where
        S: AddressSource + Send,
    {
        let accesses = self.config.accesses_per_worker;
        let delay = self.config.access_delay();
        let workers = sources.len();
        info!(
            policy = cache.policy().name(),
            workers, accesses, "simulation started"
        );
        let start = Instant::now();

        let results = thread::scope(|scope| {
            let handles: Vec<_> = sources
                .into_iter()
                .enumerate()
                .map(|(idx, mut source)| {
                    scope.spawn(move || {
                        let id = idx + 1;
                        let _span = debug_span!("worker", id).entered();
                        let mut stats = WorkerStats::new(id);
                        for i in 0..accesses {
                            let addr = source.next_address();
                            debug!(address = addr, "accessing");
                            stats.record(cache.access(addr));
                            if i + 1 < accesses && !delay.is_zero() {
                                thread::sleep(delay);
                            }
                        }
                        stats
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect::<Vec<_>>()
        });

        let report = SimulationReport {
            workers: results,
            elapsed: start.elapsed(),
        };
        info!(
            accesses = report.accesses(),
            hits = report.hits(),
            misses = report.misses(),
            "simulation finished"
        );
        report
    }
}
