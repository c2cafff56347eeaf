//! Invariants that must hold after every operation sequence.

use super::common::assert_bag_well_formed;
use super::{entry_strategy, maybe_entry_strategy, ops_strategy};
use arraybag::prelude::*;
use arraybag::testing::apply_op;
use proptest::prelude::*;

proptest! {
    /// Size equals successful adds minus successful removals.
    #[test]
    fn size_tracks_successful_operations(ops in ops_strategy()) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        let mut expected = 0usize;

        for op in &ops {
            match apply_op(&mut bag, op) {
                arraybag::testing::OpResult::Added(Ok(true)) => expected += 1,
                arraybag::testing::OpResult::Removed(Some(_))
                | arraybag::testing::OpResult::RemovedEntry(true) => expected -= 1,
                arraybag::testing::OpResult::Cleared => expected = 0,
                _ => {}
            }
            prop_assert_eq!(bag.current_size(), expected);
        }
        assert_bag_well_formed(&bag);
    }

    /// Adding an absent entry never changes the size.
    #[test]
    fn absent_add_is_a_no_op(ops in ops_strategy()) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        for op in &ops {
            apply_op(&mut bag, op);
        }
        let before = bag.to_array();

        prop_assert_eq!(bag.add(None), Ok(false));
        prop_assert_eq!(bag.to_array(), before);
    }

    /// After a successful add the entry is present.
    #[test]
    fn added_entry_is_present(ops in ops_strategy(), entry in entry_strategy()) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        for op in &ops {
            apply_op(&mut bag, op);
        }

        prop_assert_eq!(bag.add(entry.clone()), Ok(true));
        prop_assert!(bag.contains(&entry));
        prop_assert!(bag.frequency_of(&entry) >= 1);
    }

    /// A miss never mutates the bag.
    #[test]
    fn missing_removals_do_not_mutate(ops in ops_strategy()) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        for op in &ops {
            apply_op(&mut bag, op);
        }
        let before = bag.to_array();

        prop_assert!(!bag.remove_entry(&"not in the alphabet".to_string()));
        prop_assert_eq!(bag.to_array(), before.clone());

        bag.clear();
        prop_assert_eq!(bag.remove(), None);
        prop_assert_eq!(bag.current_size(), 0);
    }

    /// One removal lowers the entry's frequency and the size by exactly one.
    #[test]
    fn removal_is_exactly_one_occurrence(
        ops in ops_strategy(),
        target in maybe_entry_strategy(),
    ) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        for op in &ops {
            apply_op(&mut bag, op);
        }
        let frequency = bag.frequency_of(target.as_ref());
        let size = bag.current_size();

        let removed = bag.remove_entry(target.as_ref());
        prop_assert_eq!(removed, frequency > 0);
        prop_assert_eq!(bag.frequency_of(target.as_ref()), frequency - usize::from(removed));
        prop_assert_eq!(bag.current_size(), size - usize::from(removed));
    }

    /// Every snapshot entry is found, and frequencies add up to the size.
    #[test]
    fn snapshot_agrees_with_queries(ops in ops_strategy()) {
        let mut bag: ArrayBag<String> = ArrayBag::new();
        for op in &ops {
            apply_op(&mut bag, op);
        }
        let snapshot = bag.to_array();
        prop_assert_eq!(snapshot.len(), bag.current_size());

        let mut distinct = snapshot.clone();
        distinct.sort();
        distinct.dedup();

        let mut total = 0;
        for entry in &distinct {
            prop_assert!(bag.contains(entry));
            let frequency = bag.frequency_of(entry);
            prop_assert_eq!(frequency, snapshot.iter().filter(|e| *e == entry).count());
            total += frequency;
        }
        prop_assert_eq!(total, bag.current_size());
    }

    /// Growth only happens by doubling from the initial capacity.
    #[test]
    fn capacity_is_initial_times_power_of_two(
        initial in 1i64..16,
        ops in ops_strategy(),
    ) {
        let mut bag: ArrayBag<String> = ArrayBag::with_capacity(initial).unwrap();
        for op in &ops {
            apply_op(&mut bag, op);
        }
        let ratio = bag.capacity() as i64 / initial;
        prop_assert_eq!(bag.capacity() as i64 % initial, 0);
        prop_assert!(ratio.count_ones() == 1);
        assert_bag_well_formed(&bag);
    }
}
