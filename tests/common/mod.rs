//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use arraybag::prelude::*;
use std::fmt::Debug;

// Re-export canonical test utilities from arraybag::testing
pub use arraybag::testing::{sorted, DropBomb, ReferenceBag};

// ============================================================================
// FIXTURES
// ============================================================================

/// A bag of the given initial capacity holding `0..count`.
pub fn filled_bag(capacity: i64, count: u32) -> ArrayBag<u32> {
    let mut bag: ArrayBag<u32> = ArrayBag::with_capacity(capacity).unwrap();
    for entry in 0..count {
        bag.add(entry).unwrap();
    }
    bag
}

/// A default bag holding the given strings, in order.
pub fn string_bag(entries: &[&str]) -> ArrayBag<String> {
    let mut bag: ArrayBag<String> = ArrayBag::new();
    for entry in entries {
        bag.add(entry.to_string()).unwrap();
    }
    bag
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert the bag holds exactly `expected`, ignoring order.
pub fn assert_same_multiset<T>(bag: &ArrayBag<T>, expected: &[T])
where
    T: Ord + Clone + Debug,
{
    assert_eq!(
        sorted(bag.to_array()),
        sorted(expected.to_vec()),
        "bag contents differ"
    );
}

/// Assert the bag is usable and its slot layout is consistent.
pub fn assert_bag_well_formed<T: PartialEq>(bag: &ArrayBag<T>) {
    assert!(!bag.is_poisoned(), "bag is poisoned: {:?}", bag.integrity());
    if let Err(violation) = bag.verify() {
        panic!("bag layout violated: {}", violation);
    }
    assert!(bag.current_size() <= bag.capacity());
}
