// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked after every structural change.
//!
//! These are `debug_assert!`s: they run in tests and debug builds and compile
//! to nothing in release. A failing contract means the bag's own code is
//! wrong, not the caller's.
//!
//! | Contract                    | Checked after            |
//! |-----------------------------|--------------------------|
//! | `check_bag_well_formed`     | every mutation           |
//! | `check_growth`              | storage resize           |
//! | `check_removal_accounting`  | `remove` / `remove_entry`|
//! | `check_frequency_bounded`   | `frequency_of`           |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    use crate::capacity::{DEFAULT_CAPACITY, MAX_CAPACITY};

    // INVARIANT: the default bag is itself a legal capacity
    assert!(DEFAULT_CAPACITY > 0);
    assert!(DEFAULT_CAPACITY <= MAX_CAPACITY);
};

use super::types::check_layout;

// ============================================================================
// LAYOUT CONTRACTS
// ============================================================================

/// Check the populated-prefix layout.
///
/// # Panics (debug builds only)
/// Panics with the first [`InvariantError`](super::InvariantError) found.
#[inline]
pub fn check_bag_well_formed<T>(slots: &[Option<T>], count: usize) {
    if cfg!(debug_assertions) {
        if let Err(violation) = check_layout(slots, count) {
            panic!("Contract violation: bag layout - {}", violation);
        }
    }
}

/// Check that a resize strictly grew the storage and kept every element.
#[inline]
pub fn check_growth(old_capacity: usize, new_capacity: usize, count_before: usize, count_after: usize) {
    debug_assert!(
        new_capacity > old_capacity,
        "Contract violation: growth - capacity {} -> {} did not grow",
        old_capacity,
        new_capacity
    );
    debug_assert_eq!(
        count_before, count_after,
        "Contract violation: growth - count changed from {} to {}",
        count_before, count_after
    );
}

/// Check that a removal took exactly one element, or none.
#[inline]
pub fn check_removal_accounting(count_before: usize, count_after: usize, removed: bool) {
    let expected = if removed { count_before - 1 } else { count_before };
    debug_assert_eq!(
        count_after, expected,
        "Contract violation: removal - count {} -> {} (removed: {})",
        count_before, count_after, removed
    );
}

/// Check that a frequency never exceeds the number of populated slots.
#[inline]
pub fn check_frequency_bounded(frequency: usize, count: usize) {
    debug_assert!(
        frequency <= count,
        "Contract violation: frequency {} > count {}",
        frequency,
        count
    );
}
