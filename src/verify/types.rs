// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for structural checks on a bag.
//!
//! Two different failures live here. [`InvariantError`] is what
//! `ArrayBag::verify()` reports when the slot layout is wrong: a hole in the
//! populated prefix, a leftover element in the tail, a count past the end.
//! [`IntegrityError`] is the gate every public operation passes through: it
//! fires when a structural mutation (a resize or a clear) was interrupted by
//! a panic and the bag never got back to a consistent state.

use crate::capacity::MAX_CAPACITY;
use std::fmt;

/// Error type for slot layout violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `count` points past the end of the storage.
    CountExceedsCapacity { count: usize, capacity: usize },
    /// Storage length is zero or above `MAX_CAPACITY`.
    CapacityOutOfRange { capacity: usize },
    /// A slot inside the populated prefix holds no element.
    EmptyPopulatedSlot { index: usize, count: usize },
    /// A slot past the populated prefix still holds an element.
    OccupiedTailSlot { index: usize, count: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::CountExceedsCapacity { count, capacity } => {
                write!(f, "count {} > capacity {}", count, capacity)
            }
            InvariantError::CapacityOutOfRange { capacity } => {
                write!(
                    f,
                    "capacity {} outside 1..={}",
                    capacity, MAX_CAPACITY
                )
            }
            InvariantError::EmptyPopulatedSlot { index, count } => {
                write!(f, "slot {} is empty but count is {}", index, count)
            }
            InvariantError::OccupiedTailSlot { index, count } => {
                write!(f, "slot {} is occupied but count is {}", index, count)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// The bag was left mid-mutation and refuses further use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityError;

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("state is not valid")
    }
}

impl std::error::Error for IntegrityError {}

/// Check a raw slot layout against the bag's structural invariants.
///
/// Shared by `ArrayBag::verify()` and the debug contracts so both report the
/// same first violation.
pub fn check_layout<T>(slots: &[Option<T>], count: usize) -> Result<(), InvariantError> {
    let capacity = slots.len();

    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(InvariantError::CapacityOutOfRange { capacity });
    }

    if count > capacity {
        return Err(InvariantError::CountExceedsCapacity { count, capacity });
    }

    // INVARIANT: slots[0..count) are all Some
    if let Some(index) = slots[..count].iter().position(Option::is_none) {
        return Err(InvariantError::EmptyPopulatedSlot { index, count });
    }

    // INVARIANT: slots[count..capacity) are all None
    if let Some(offset) = slots[count..].iter().position(Option::is_some) {
        return Err(InvariantError::OccupiedTailSlot {
            index: count + offset,
            count,
        });
    }

    Ok(())
}
