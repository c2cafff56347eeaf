//! Add, remove, query, clear, and snapshot behaviour.

use super::common::{assert_bag_well_formed, assert_same_multiset, string_bag};
use arraybag::prelude::*;

fn s(value: &str) -> String {
    value.to_string()
}

// ============================================================================
// ADD
// ============================================================================

#[test]
fn add_counts_successful_inserts_only() {
    let mut bag: ArrayBag<String> = ArrayBag::new();
    assert_eq!(bag.add(s("x")), Ok(true));
    assert_eq!(bag.add(None), Ok(false));
    assert_eq!(bag.add(Some(s("y"))), Ok(true));
    assert_eq!(bag.current_size(), 2);
    assert_bag_well_formed(&bag);
}

#[test]
fn absent_entry_is_never_found() {
    let mut bag = string_bag(&["x"]);
    bag.add(None).unwrap();

    assert!(!bag.contains(None));
    assert_eq!(bag.frequency_of(None), 0);
    assert!(!bag.remove_entry(None));
    assert_eq!(bag.current_size(), 1);
}

// ============================================================================
// REMOVE
// ============================================================================

#[test]
fn remove_on_empty_bag_returns_nothing() {
    let mut bag: ArrayBag<String> = ArrayBag::new();
    assert_eq!(bag.remove(), None);
    assert_eq!(bag.current_size(), 0);
    assert_bag_well_formed(&bag);
}

#[test]
fn remove_returns_most_recent_when_no_removal_happened_yet() {
    let mut bag = string_bag(&["first", "second", "third"]);
    assert_eq!(bag.remove(), Some(s("third")));
    assert_eq!(bag.current_size(), 2);
}

#[test]
fn remove_entry_missing_value_returns_false() {
    let mut bag = string_bag(&["a", "b"]);
    assert!(!bag.remove_entry(&s("z")));
    assert_eq!(bag.current_size(), 2);
    assert_same_multiset(&bag, &[s("a"), s("b")]);
}

#[test]
fn remove_entry_uses_value_equality() {
    let mut bag = string_bag(&["a", "b", "a"]);
    let probe = String::from("a");

    assert!(bag.remove_entry(&probe));
    assert_eq!(bag.current_size(), 2);
    assert_eq!(bag.frequency_of(&probe), 1);
    assert_same_multiset(&bag, &[s("a"), s("b")]);
}

#[test]
fn removal_does_not_preserve_insertion_order() {
    let mut bag = string_bag(&["a", "b", "c", "d", "e"]);
    assert!(bag.remove_entry(&s("b")));

    // The last entry fills the hole, so "e" now precedes "c"
    let snapshot = bag.to_array();
    assert_ne!(snapshot, vec![s("a"), s("c"), s("d"), s("e")]);
    assert_same_multiset(&bag, &[s("a"), s("c"), s("d"), s("e")]);
}

#[test]
fn remove_drains_every_entry_exactly_once() {
    let mut bag = string_bag(&["a", "b", "a", "c"]);
    let mut drained = Vec::new();
    while let Some(entry) = bag.remove() {
        drained.push(entry);
    }
    drained.sort();

    assert_eq!(drained, vec![s("a"), s("a"), s("b"), s("c")]);
    assert!(bag.is_empty());
}

// ============================================================================
// QUERIES
// ============================================================================

#[test]
fn frequency_counts_every_duplicate() {
    let bag = string_bag(&["a", "b", "a", "a", "c"]);
    assert_eq!(bag.frequency_of(&s("a")), 3);
    assert_eq!(bag.frequency_of(&s("b")), 1);
    assert_eq!(bag.frequency_of(&s("z")), 0);
    assert!(bag.contains(&s("c")));
    assert!(!bag.contains(&s("z")));
}

#[test]
fn queries_do_not_mutate() {
    let bag = string_bag(&["a", "b"]);
    let before = bag.to_array();
    let _ = bag.contains(&s("a"));
    let _ = bag.frequency_of(&s("b"));
    let _ = bag.is_empty();
    assert_eq!(bag.to_array(), before);
}

// ============================================================================
// CLEAR & SNAPSHOT
// ============================================================================

#[test]
fn clear_empties_without_shrinking() {
    let mut bag = string_bag(&["a", "b", "c"]);
    let capacity = bag.capacity();

    bag.clear();
    assert!(bag.is_empty());
    assert_eq!(bag.current_size(), 0);
    assert!(bag.to_array().is_empty());
    assert_eq!(bag.capacity(), capacity);
    assert!(!bag.contains(&s("a")));
    assert_bag_well_formed(&bag);

    // Reusable after clearing
    assert_eq!(bag.add(s("d")), Ok(true));
    assert_same_multiset(&bag, &[s("d")]);
}

#[test]
fn snapshot_is_detached_from_the_bag() {
    let mut bag = string_bag(&["a"]);
    let mut snapshot = bag.to_array();

    snapshot.push(s("extra"));
    snapshot[0].push('!');
    assert_same_multiset(&bag, &[s("a")]);

    bag.add(s("b")).unwrap();
    bag.remove_entry(&s("a"));
    assert_eq!(snapshot, vec![s("a!"), s("extra")]);
}

#[test]
fn bag_works_through_the_trait() {
    fn fill<B: Bag<u32>>(bag: &mut B, entries: &[u32]) -> usize {
        entries
            .iter()
            .filter(|entry| bag.add(**entry) == Ok(true))
            .count()
    }

    let mut bag: ArrayBag<u32> = ArrayBag::new();
    assert_eq!(fill(&mut bag, &[1, 2, 2, 3]), 4);
    assert_eq!(bag.frequency_of(&2u32), 2);
}
