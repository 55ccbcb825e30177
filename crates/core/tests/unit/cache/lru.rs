//! LRU Replacement Policy Tests.
//!
//! Exercises hit/miss classification, recency ordering, empty-slot reuse, and
//! the LRU-end eviction rule.

use pretty_assertions::assert_eq;
use rstest::rstest;

use cachesim_core::cache::policies::{LruPolicy, ReplacementPolicy};
use cachesim_core::cache::{AccessOutcome, CacheLineTable};
use cachesim_core::common::Slot;
use cachesim_core::config::ReplacementPolicy as PolicyType;

use crate::common::replay;

/// Capacity 2, [1, 2, 1, 3]: touching 1 makes 2 the LRU, so 3 evicts 2.
#[test]
fn lru_evicts_least_recently_used() {
    let (cache, outcomes) = replay(2, PolicyType::Lru, &[1, 2, 1, 3]);

    assert_eq!(
        outcomes,
        vec![
            AccessOutcome::Miss { evicted: None },
            AccessOutcome::Miss { evicted: None },
            AccessOutcome::Hit,
            AccessOutcome::Miss { evicted: Some(2) },
        ]
    );
    let snap = cache.snapshot();
    assert_eq!(snap.resident_set().into_iter().collect::<Vec<_>>(), vec![1, 3]);
    // 3 overwrites the slot 2 occupied.
    assert_eq!(snap.slots, vec![Slot::Occupied(1), Slot::Occupied(3)]);
    assert_eq!(snap.recency(), Some(&[1, 3][..]));
}

/// Without re-touching, eviction follows insertion order.
#[test]
fn lru_without_hits_evicts_oldest() {
    let (cache, outcomes) = replay(3, PolicyType::Lru, &[10, 11, 12, 13, 14]);
    assert_eq!(outcomes[3].evicted(), Some(10));
    assert_eq!(outcomes[4].evicted(), Some(11));
    assert_eq!(
        cache.snapshot().slots,
        vec![Slot::Occupied(13), Slot::Occupied(14), Slot::Occupied(12)]
    );
}

/// A hit moves the address to the MRU end without changing membership.
#[test]
fn lru_hit_reorders_only() {
    let (mut cache, _) = replay(3, PolicyType::Lru, &[1, 2, 3]);
    let before = cache.snapshot();

    assert_eq!(cache.access(1), AccessOutcome::Hit);

    let after = cache.snapshot();
    assert_eq!(before.slots, after.slots);
    assert_eq!(before.recency(), Some(&[1, 2, 3][..]));
    assert_eq!(after.recency(), Some(&[2, 3, 1][..]));
}

/// Misses fill slots from position 0 upward while the table has room.
#[test]
fn lru_fills_first_empty_slot() {
    let mut table = CacheLineTable::new(4);
    let mut policy = LruPolicy::new(4);

    for addr in [7, 5, 9] {
        let _ = policy.access(&mut table, addr);
    }
    assert_eq!(
        table.slots(),
        &[Slot::Occupied(7), Slot::Occupied(5), Slot::Occupied(9), Slot::Empty]
    );
    assert_eq!(policy.resident(), 3);
    assert_eq!(policy.recency().collect::<Vec<_>>(), vec![7, 5, 9]);
}

/// Repeated access to the MRU address keeps the victim unchanged.
#[rstest]
#[case(&[1, 2, 2, 2, 3], Some(1))]
#[case(&[1, 2, 1, 1, 3], Some(2))]
#[case(&[1, 2, 2, 1, 3], Some(2))]
#[case(&[1, 2, 1, 2, 3], Some(1))]
fn lru_victim_after_touch_pattern(#[case] trace: &[u64], #[case] expected: Option<u64>) {
    let (_, outcomes) = replay(2, PolicyType::Lru, trace);
    assert_eq!(outcomes.last().and_then(|o| o.evicted()), expected);
}

/// Capacity 1 evicts on every distinct miss.
#[test]
fn lru_single_slot() {
    let (cache, outcomes) = replay(1, PolicyType::Lru, &[4, 4, 5, 4]);
    assert_eq!(
        outcomes,
        vec![
            AccessOutcome::Miss { evicted: None },
            AccessOutcome::Hit,
            AccessOutcome::Miss { evicted: Some(4) },
            AccessOutcome::Miss { evicted: Some(5) },
        ]
    );
    assert_eq!(cache.snapshot().slots, vec![Slot::Occupied(4)]);
}
