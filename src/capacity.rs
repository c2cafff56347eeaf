// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Capacity policy shared by construction and growth.
//!
//! One rule decides every capacity the bag ever holds: it must be positive and
//! no larger than [`MAX_CAPACITY`]. Construction checks the caller's request
//! against it, and growth checks the doubled capacity against it. There is no
//! clamping. A bag at 5,120 slots that fills up cannot double to 10,240, so the
//! next `add` fails instead of growing to exactly 10,000.

use crate::utils::group_thousands;
use std::fmt;

/// Capacity of a bag built with `ArrayBag::new()`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Hard ceiling on the number of slots a bag may allocate.
pub const MAX_CAPACITY: usize = 10_000;

/// Growth factor applied when the populated prefix fills the storage.
pub const GROWTH_FACTOR: i64 = 2;

/// A requested or computed capacity outside `(0, MAX_CAPACITY]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// The capacity was zero or negative.
    TooSmall(i64),
    /// The capacity exceeded [`MAX_CAPACITY`].
    TooLarge(i64),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CapacityError::TooSmall(requested) => {
                write!(f, "desired capacity is too small: {}", group_thousands(requested))
            }
            CapacityError::TooLarge(requested) => {
                write!(f, "desired capacity is too large: {}", group_thousands(requested))
            }
        }
    }
}

impl std::error::Error for CapacityError {}

/// Validate a desired capacity, returning it as a slot count.
///
/// # Errors
/// - [`CapacityError::TooSmall`] when `desired <= 0`
/// - [`CapacityError::TooLarge`] when `desired > MAX_CAPACITY`
pub fn check_capacity(desired: i64) -> Result<usize, CapacityError> {
    if desired <= 0 {
        return Err(CapacityError::TooSmall(desired));
    }

    if desired > MAX_CAPACITY as i64 {
        return Err(CapacityError::TooLarge(desired));
    }

    // INVARIANT: 0 < desired <= MAX_CAPACITY, so the cast is lossless
    Ok(desired as usize)
}

/// Capacity the storage should grow to once `current` slots are full.
///
/// Saturates instead of overflowing so that absurd inputs still land in
/// [`CapacityError::TooLarge`].
pub fn grown_capacity(current: usize) -> Result<usize, CapacityError> {
    let current = i64::try_from(current).unwrap_or(i64::MAX);
    check_capacity(current.saturating_mul(GROWTH_FACTOR))
}
