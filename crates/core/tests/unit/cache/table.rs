//! Cache Line Table Tests.

use cachesim_core::cache::CacheLineTable;
use cachesim_core::common::Slot;

#[test]
fn new_table_is_all_empty() {
    let table = CacheLineTable::new(4);
    assert_eq!(table.capacity(), 4);
    assert_eq!(table.occupied(), 0);
    assert!(table.slots().iter().all(|s| s.is_empty()));
    assert_eq!(table.first_empty(), Some(0));
    assert_eq!(table.resident().count(), 0);
}

#[test]
fn position_and_contains_miss_on_empty_table() {
    let table = CacheLineTable::new(2);
    assert_eq!(table.position(0), None);
    assert!(!table.contains(0));
}

#[test]
fn slot_display_matches_operator_output() {
    assert_eq!(Slot::Empty.to_string(), "empty");
    assert_eq!(Slot::Occupied(17).to_string(), "17");
}

#[test]
fn slot_accessors() {
    let slot = Slot::Occupied(3);
    assert_eq!(slot.address(), Some(3));
    assert!(slot.holds(3));
    assert!(!slot.holds(4));
    assert!(!slot.is_empty());
    assert_eq!(Slot::default(), Slot::Empty);
    assert_eq!(Slot::Empty.address(), None);
}
