//! Statistics collection and reporting.
//!
//! This module tracks hit/miss behavior for the cache simulator. It provides:
//! 1. **Cache counters:** Accesses, hits, misses, and evictions for the life of one cache.
//! 2. **Worker counters:** Hits and misses seen by each simulation worker.
//! 3. **Run reports:** Per-run aggregation with wall-clock time.

use std::time::Duration;

use crate::cache::AccessOutcome;

/// Fraction of `total` that were hits, in `[0.0, 1.0]`; zero when `total` is zero.
pub fn hit_ratio(hits: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// Hit/miss counters for one cache instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total accesses performed.
    pub accesses: u64,
    /// Accesses that found the address resident.
    pub hits: u64,
    /// Accesses that admitted the address.
    pub misses: u64,
    /// Misses that displaced a resident address.
    pub evictions: u64,
}

impl CacheStats {
    /// Accounts for one access.
    pub const fn record(&mut self, outcome: AccessOutcome) {
        self.accesses += 1;
        match outcome {
            AccessOutcome::Hit => self.hits += 1,
            AccessOutcome::Miss { evicted } => {
                self.misses += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of accesses that hit, in `[0.0, 1.0]`; zero before any access.
    pub fn hit_rate(&self) -> f64 {
        hit_ratio(self.hits, self.accesses)
    }

    /// Prints the counters to stdout.
    pub fn print(&self) {
        println!("CACHE");
        println!("  cache.accesses         {}", self.accesses);
        println!("  cache.hits             {}", self.hits);
        println!("  cache.misses           {}", self.misses);
        println!("  cache.evictions        {}", self.evictions);
        println!("  cache.hit_rate         {:.2}%", self.hit_rate() * 100.0);
    }
}

/// Counters for one simulation worker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// One-based worker id.
    pub worker: usize,
    /// Hits observed by this worker.
    pub hits: u64,
    /// Misses observed by this worker.
    pub misses: u64,
}

impl WorkerStats {
    /// Empty counters for worker `worker`.
    pub const fn new(worker: usize) -> Self {
        Self {
            worker,
            hits: 0,
            misses: 0,
        }
    }

    /// Accounts for one access.
    pub const fn record(&mut self, outcome: AccessOutcome) {
        if outcome.is_hit() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    /// Total accesses issued by this worker.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

/// Result of one concurrent simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationReport {
    /// Per-worker counters, ordered by worker id.
    pub workers: Vec<WorkerStats>,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl SimulationReport {
    /// Accesses issued across all workers.
    pub fn accesses(&self) -> u64 {
        self.workers.iter().map(WorkerStats::accesses).sum()
    }

    /// Hits across all workers.
    pub fn hits(&self) -> u64 {
        self.workers.iter().map(|w| w.hits).sum()
    }

    /// Misses across all workers.
    pub fn misses(&self) -> u64 {
        self.workers.iter().map(|w| w.misses).sum()
    }

    /// Fraction of all worker accesses that hit, in `[0.0, 1.0]`.
    pub fn hit_rate(&self) -> f64 {
        hit_ratio(self.hits(), self.accesses())
    }

    /// Prints the run summary and a per-worker breakdown to stdout.
    pub fn print(&self) {
        let total = self.accesses();
        let rate = self.hit_rate() * 100.0;
        println!("\n==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", self.elapsed.as_secs_f64());
        println!("sim_workers              {}", self.workers.len());
        println!("sim_accesses             {total}");
        println!("sim_hits                 {}", self.hits());
        println!("sim_misses               {}", self.misses());
        println!("sim_hit_rate             {rate:.2}%");
        println!("----------------------------------------------------------");
        println!("WORKERS");
        for w in &self.workers {
            println!(
                "  worker.{:<3} accesses: {:<6} | hits: {:<6} | misses: {}",
                w.worker,
                w.accesses(),
                w.hits,
                w.misses
            );
        }
        println!("==========================================================");
    }
}
