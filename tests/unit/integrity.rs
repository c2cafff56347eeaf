//! The integrity gate: a bag interrupted mid-mutation refuses further use.

use super::common::DropBomb;
use arraybag::prelude::*;
use arraybag::{IntegrityError, InvariantError};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A bag whose `clear` panicked halfway through.
fn poisoned_bag() -> ArrayBag<DropBomb> {
    let mut bag: ArrayBag<DropBomb> = ArrayBag::new();
    bag.add(DropBomb::inert(0)).unwrap();
    bag.add(DropBomb::armed(1)).unwrap();
    bag.add(DropBomb::inert(2)).unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| bag.clear()));
    assert!(outcome.is_err(), "armed entry should panic on drop");
    bag
}

#[test]
fn healthy_bag_passes_the_gate() {
    let bag: ArrayBag<u8> = ArrayBag::new();
    assert_eq!(bag.integrity(), Ok(()));
    assert!(!bag.is_poisoned());
}

#[test]
fn interrupted_clear_poisons_the_bag() {
    let bag = poisoned_bag();
    assert!(bag.is_poisoned());
    assert_eq!(bag.integrity(), Err(IntegrityError));
}

#[test]
fn verify_reports_what_the_interruption_left() {
    let bag = poisoned_bag();
    // Slots 0 and 1 were taken before the panic, slot 2 was not
    assert_eq!(
        bag.verify(),
        Err(InvariantError::EmptyPopulatedSlot { index: 0, count: 3 })
    );
}

#[test]
#[should_panic(expected = "state is not valid")]
fn poisoned_bag_rejects_add() {
    let mut bag = poisoned_bag();
    let _ = bag.add(DropBomb::inert(3));
}

#[test]
#[should_panic(expected = "state is not valid")]
fn poisoned_bag_rejects_remove() {
    let mut bag = poisoned_bag();
    bag.remove();
}

#[test]
#[should_panic(expected = "state is not valid")]
fn poisoned_bag_rejects_queries() {
    let bag = poisoned_bag();
    bag.contains(&DropBomb::inert(2));
}

#[test]
#[should_panic(expected = "state is not valid")]
fn poisoned_bag_rejects_clear() {
    let mut bag = poisoned_bag();
    bag.clear();
}

#[test]
fn panicking_drop_outside_clear_does_not_poison() {
    let mut bag: ArrayBag<DropBomb> = ArrayBag::new();
    bag.add(DropBomb::armed(1)).unwrap();

    // The removed entry is dropped after the bag is consistent again
    let outcome = catch_unwind(AssertUnwindSafe(|| bag.remove_entry(&DropBomb::armed(1))));
    assert!(outcome.is_err());
    assert!(!bag.is_poisoned());
    assert!(bag.is_empty());
}
