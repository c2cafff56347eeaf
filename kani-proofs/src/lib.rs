// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the bag's capacity policy and removal.
//!
//! This standalone crate extracts the capacity check, the growth rule, and the
//! swap-with-last removal, and proves them using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Capacity policy**: `check_capacity` accepts exactly `1..=MAX_CAPACITY`
//! 2. **Growth**: a successful growth exactly doubles; it never clamps
//! 3. **Removal**: `remove_at` keeps the prefix dense and removes one entry

/// Hard ceiling on slot count (copied from src/capacity.rs)
pub const MAX_CAPACITY: usize = 10_000;

// ============================================================================
// CAPACITY POLICY (copied from src/capacity.rs)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    TooSmall(i64),
    TooLarge(i64),
}

pub fn check_capacity(desired: i64) -> Result<usize, CapacityError> {
    if desired <= 0 {
        return Err(CapacityError::TooSmall(desired));
    }
    if desired > MAX_CAPACITY as i64 {
        return Err(CapacityError::TooLarge(desired));
    }
    Ok(desired as usize)
}

pub fn grown_capacity(current: usize) -> Result<usize, CapacityError> {
    let current = i64::try_from(current).unwrap_or(i64::MAX);
    check_capacity(current.saturating_mul(2))
}

// ============================================================================
// SWAP-WITH-LAST REMOVAL (copied from src/array_bag.rs)
// ============================================================================

/// Remove `slots[index]` by swapping in the last populated slot.
pub fn remove_at<T>(slots: &mut [Option<T>], count: &mut usize, index: usize) -> Option<T> {
    if *count == 0 || index >= *count {
        return None;
    }
    let last = *count - 1;
    slots.swap(index, last);
    let removed = slots[last].take();
    *count = last;
    removed
}

/// Whether `slots[..count]` are all `Some` and the rest all `None`.
pub fn is_dense<T>(slots: &[Option<T>], count: usize) -> bool {
    count <= slots.len()
        && slots[..count].iter().all(Option::is_some)
        && slots[count..].iter().all(Option::is_none)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const SLOTS: usize = 4;

    /// A symbolic dense layout with up to SLOTS entries.
    fn any_dense_layout() -> ([Option<u8>; SLOTS], usize) {
        let count: usize = kani::any_where(|&n| n <= SLOTS);
        let mut slots = [None; SLOTS];
        for i in 0..SLOTS {
            if i < count {
                slots[i] = Some(kani::any());
            }
        }
        (slots, count)
    }

    /// Verify check_capacity accepts exactly 1..=MAX_CAPACITY.
    #[kani::proof]
    fn verify_check_capacity_range() {
        let desired: i64 = kani::any();
        match check_capacity(desired) {
            Ok(capacity) => {
                kani::assert(desired > 0, "accepted capacity must be positive");
                kani::assert(capacity <= MAX_CAPACITY, "accepted capacity must fit");
                kani::assert(capacity as i64 == desired, "accepted capacity is unchanged");
            }
            Err(CapacityError::TooSmall(value)) => {
                kani::assert(value == desired && desired <= 0, "TooSmall only for <= 0");
            }
            Err(CapacityError::TooLarge(value)) => {
                kani::assert(
                    value == desired && desired > MAX_CAPACITY as i64,
                    "TooLarge only above the ceiling",
                );
            }
        }
    }

    /// Verify growth doubles exactly or fails; it never clamps.
    #[kani::proof]
    fn verify_growth_never_clamps() {
        let current: usize = kani::any_where(|&n| n >= 1 && n <= MAX_CAPACITY);
        match grown_capacity(current) {
            Ok(grown) => {
                kani::assert(grown == current * 2, "growth must double");
                kani::assert(grown <= MAX_CAPACITY, "growth must respect the ceiling");
            }
            Err(error) => {
                kani::assert(current * 2 > MAX_CAPACITY, "only oversize growth fails");
                kani::assert(
                    error == CapacityError::TooLarge((current * 2) as i64),
                    "failure reports the doubled capacity",
                );
            }
        }
    }

    /// Verify remove_at keeps the layout dense and removes exactly one entry.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_remove_at_keeps_prefix_dense() {
        let (mut slots, mut count) = any_dense_layout();
        let original = slots;
        let original_count = count;
        let index: usize = kani::any_where(|&i| i < SLOTS + 1);

        let removed = remove_at(&mut slots, &mut count, index);

        kani::assert(is_dense(&slots, count), "layout must stay dense");
        if index < original_count {
            kani::assert(removed == original[index], "must return the target entry");
            kani::assert(count == original_count - 1, "count drops by one");
        } else {
            kani::assert(removed.is_none(), "out-of-range index removes nothing");
            kani::assert(count == original_count, "count unchanged on miss");
            kani::assert(slots == original, "slots unchanged on miss");
        }
    }
}
