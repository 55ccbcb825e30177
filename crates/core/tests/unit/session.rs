//! # Session Tests
//!
//! The operator lifecycle: uninitialized errors, policy selection with
//! fallback, range checks, and isolation between successive caches.

use pretty_assertions::assert_eq;

use cachesim_core::cache::AccessOutcome;
use cachesim_core::common::Slot;
use cachesim_core::config::{Config, ReplacementPolicy};
use cachesim_core::{CacheError, CacheSession};

use crate::common::{fast_config, init_tracing};

#[test]
fn uninitialized_session_reports_errors() {
    let session = CacheSession::new(Config::default());
    assert!(!session.is_initialized());
    assert_eq!(session.policy(), None);
    assert!(matches!(session.access(1), Err(CacheError::Uninitialized)));
    assert!(matches!(session.display(), Err(CacheError::Uninitialized)));
    assert!(matches!(session.simulate(), Err(CacheError::Uninitialized)));
}

#[test]
fn destroy_without_cache_is_noop() {
    let mut session = CacheSession::new(Config::default());
    assert_eq!(session.destroy(), None);
    assert!(!session.is_initialized());
}

#[test]
fn select_policy_constructs_empty_cache() {
    init_tracing();
    let mut session = CacheSession::new(fast_config(4, ReplacementPolicy::Lru));
    let selection = session.select_policy("2").unwrap();
    assert_eq!(selection.policy, ReplacementPolicy::Lfu);
    assert!(!selection.fallback);
    assert_eq!(session.policy(), Some(ReplacementPolicy::Lfu));

    let snap = session.display().unwrap();
    assert_eq!(snap.slots, vec![Slot::Empty; 4]);
    assert_eq!(snap.to_string(), "Current Cache (LFU): empty empty empty empty");
}

#[test]
fn invalid_selection_falls_back_to_lru() {
    init_tracing();
    let mut session = CacheSession::new(fast_config(4, ReplacementPolicy::Lfu));
    let selection = session.select_policy("7").unwrap();
    assert!(selection.fallback);
    assert_eq!(session.policy(), Some(ReplacementPolicy::Lru));
}

#[test]
fn access_rejects_out_of_range_address() {
    let session = CacheSession::with_cache(fast_config(4, ReplacementPolicy::Lru)).unwrap();
    match session.access(32) {
        Err(CacheError::AddressOutOfRange {
            address,
            memory_size,
        }) => {
            assert_eq!(address, 32);
            assert_eq!(memory_size, 32);
        }
        other => panic!("expected AddressOutOfRange, got {other:?}"),
    }
    assert_eq!(session.display().unwrap().occupied(), 0);
    assert_eq!(session.access(31).unwrap(), AccessOutcome::Miss { evicted: None });
}

#[test]
fn policy_switch_starts_from_empty_state() {
    init_tracing();
    let mut session = CacheSession::with_cache(fast_config(2, ReplacementPolicy::Lfu)).unwrap();
    for addr in [1, 1, 1, 2] {
        let _ = session.access(addr).unwrap();
    }
    assert_eq!(session.display().unwrap().frequency(1), Some(3));

    let _ = session.select_policy("lfu").unwrap();
    let snap = session.display().unwrap();
    assert_eq!(snap.occupied(), 0);
    assert_eq!(snap.frequency(1), None);
    assert_eq!(snap.stats.accesses, 0);

    // 1 starts from count 1 again, so it is the tie-break victim.
    for addr in [1, 2, 3] {
        let _ = session.access(addr).unwrap();
    }
    assert_eq!(session.display().unwrap().resident(), vec![3, 2]);
}

#[test]
fn destroy_returns_final_stats() {
    let mut session = CacheSession::with_cache(fast_config(2, ReplacementPolicy::Lru)).unwrap();
    for addr in [1, 2, 1, 3] {
        let _ = session.access(addr).unwrap();
    }
    let stats = session.destroy().unwrap();
    assert_eq!((stats.accesses, stats.hits, stats.misses, stats.evictions), (4, 1, 3, 1));
    assert!(matches!(session.display(), Err(CacheError::Uninitialized)));
}

#[test]
fn construct_with_zero_capacity_keeps_existing_cache() {
    let mut session = CacheSession::with_cache(fast_config(2, ReplacementPolicy::Lru)).unwrap();
    let _ = session.access(5).unwrap();
    assert!(matches!(
        session.construct(0, ReplacementPolicy::Lfu),
        Err(CacheError::InvalidConfig(_))
    ));
    assert_eq!(session.policy(), Some(ReplacementPolicy::Lru));
    assert_eq!(session.display().unwrap().resident(), vec![5]);
}

#[test]
fn simulate_runs_against_current_cache() {
    init_tracing();
    let session = CacheSession::with_cache(fast_config(16, ReplacementPolicy::Lfu)).unwrap();
    let report = session.simulate().unwrap();
    assert_eq!(report.workers.len(), 4);
    assert_eq!(report.accesses(), 40);

    let snap = session.display().unwrap();
    assert_eq!(snap.stats.accesses, 40);
    assert!(snap.is_consistent());
    assert!(snap.occupied() <= 16);
}
