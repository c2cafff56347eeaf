// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bag contract.
//!
//! A bag is an unordered collection that allows duplicates. Every operation
//! here treats an absent entry (`None`) as a defined input: it is never
//! stored, so it is never found, counted, or removed.

use crate::capacity::CapacityError;

/// Operations every bag implementation provides.
///
/// Equality is by value (`PartialEq`), never by identity.
pub trait Bag<T: PartialEq> {
    /// Add an entry.
    ///
    /// Returns `Ok(false)` for an absent entry without touching the bag.
    ///
    /// # Errors
    /// [`CapacityError`] when the bag is full and cannot grow. The bag is left
    /// exactly as it was before the call.
    fn add(&mut self, entry: impl Into<Option<T>>) -> Result<bool, CapacityError>;

    /// Remove an unspecified entry, or `None` when empty.
    fn remove(&mut self) -> Option<T>;

    /// Remove one occurrence of `entry`. Returns whether anything was removed.
    fn remove_entry<'a>(&mut self, entry: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a;

    /// Whether at least one occurrence of `entry` is present.
    fn contains<'a>(&self, entry: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a;

    /// Number of occurrences of `entry`.
    fn frequency_of<'a>(&self, entry: impl Into<Option<&'a T>>) -> usize
    where
        T: 'a;

    /// Number of entries currently held.
    fn current_size(&self) -> usize;

    /// Whether the bag holds no entries.
    fn is_empty(&self) -> bool;

    /// Remove every entry.
    fn clear(&mut self);

    /// Snapshot of the entries, in no particular order.
    ///
    /// The returned vector is independent of the bag: later changes to either
    /// are not visible in the other.
    fn to_array(&self) -> Vec<T>
    where
        T: Clone;
}
