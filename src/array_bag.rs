// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A bag backed by a manually grown array.
//!
//! # Layout
//!
//! ```text
//!   slots:  [ Some(a) | Some(b) | Some(a) |  None  |  None  ]
//!             └──── populated prefix ────┘ └──── tail ────┘
//!             0                    count-1  count  capacity-1
//! ```
//!
//! `count` is the single source of truth. Adding writes slot `count`;
//! removing swaps the target with slot `count - 1` and takes that slot. When
//! the prefix fills the storage, the storage doubles, subject to
//! [`MAX_CAPACITY`](crate::MAX_CAPACITY). It never shrinks.
//!
//! # Integrity
//!
//! Reentrant calls are impossible: every mutation holds `&mut self`. What
//! remains is unwinding. If a panic escapes a resize or a clear (an element's
//! `Drop` panicking, say), the bag stays marked as mid-mutation and every
//! later operation panics with [`IntegrityError`]. Use
//! [`ArrayBag::integrity`] to probe without panicking.

use std::fmt;
use std::iter;

use tracing::{debug, trace, warn};

use crate::bag::Bag;
use crate::capacity::{check_capacity, grown_capacity, CapacityError, DEFAULT_CAPACITY};
use crate::verify::{check_layout, contracts, IntegrityError, InvariantError};

/// Whether the slot layout can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Valid,
    Mutating,
}

/// Unordered multiset stored in a densely packed, growable array.
#[derive(Clone)]
pub struct ArrayBag<T> {
    slots: Box<[Option<T>]>,
    count: usize,
    state: State,
}

impl<T> ArrayBag<T> {
    /// Create an empty bag with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Create an empty bag with `initial_capacity` slots.
    ///
    /// # Errors
    /// [`CapacityError`] unless `0 < initial_capacity <= MAX_CAPACITY`.
    pub fn with_capacity(initial_capacity: i64) -> Result<Self, CapacityError> {
        let capacity = check_capacity(initial_capacity)?;
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            count: 0,
            state: State::Valid,
        }
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `Ok` when the bag is usable, `Err` when a mutation was interrupted.
    pub fn integrity(&self) -> Result<(), IntegrityError> {
        match self.state {
            State::Valid => Ok(()),
            State::Mutating => Err(IntegrityError),
        }
    }

    /// Whether an interrupted mutation left the bag unusable.
    pub fn is_poisoned(&self) -> bool {
        self.integrity().is_err()
    }

    /// Check the slot layout against every structural invariant.
    ///
    /// Unlike the public operations this does not panic on a poisoned bag, so
    /// it can be used to inspect what the interrupted mutation left behind.
    pub fn verify(&self) -> Result<(), InvariantError> {
        check_layout(&self.slots, self.count)
    }

    #[track_caller]
    fn check_integrity(&self) {
        if let Err(error) = self.integrity() {
            panic!("{}", error);
        }
    }

    fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    fn populated(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.count].iter().filter_map(Option::as_ref)
    }

    /// Make room for one more entry, doubling the storage if it is full.
    ///
    /// The new capacity is validated before anything is touched, so a
    /// rejected growth leaves the bag usable and unchanged.
    fn ensure_capacity(&mut self) -> Result<(), CapacityError> {
        if !self.is_full() {
            return Ok(());
        }

        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity).inspect_err(|error| {
            warn!(capacity = old_capacity, %error, "bag storage cannot grow");
        })?;

        self.state = State::Mutating;
        let count_before = self.count;

        let mut grown = empty_slots(new_capacity);
        for (target, source) in grown.iter_mut().zip(self.slots[..self.count].iter_mut()) {
            *target = source.take();
        }
        self.slots = grown;

        contracts::check_growth(old_capacity, self.capacity(), count_before, self.count);
        self.state = State::Valid;

        debug!(from = old_capacity, to = new_capacity, "grew bag storage");
        Ok(())
    }

    /// Remove the entry at `index` by moving the last entry into its slot.
    ///
    /// O(1), and the relative order of the remaining entries is not kept.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if self.count == 0 || index >= self.count {
            return None;
        }

        let count_before = self.count;
        let last = self.count - 1;

        self.slots.swap(index, last);
        let removed = self.slots[last].take();
        self.count = last;

        contracts::check_removal_accounting(count_before, self.count, removed.is_some());
        contracts::check_bag_well_formed(&self.slots, self.count);
        trace!(index, count = self.count, "removed entry");
        removed
    }
}

impl<T: PartialEq> ArrayBag<T> {
    fn index_of(&self, entry: &T) -> Option<usize> {
        self.populated().position(|candidate| candidate == entry)
    }
}

impl<T: PartialEq> Bag<T> for ArrayBag<T> {
    fn add(&mut self, entry: impl Into<Option<T>>) -> Result<bool, CapacityError> {
        self.check_integrity();

        let Some(entry) = entry.into() else {
            return Ok(false);
        };

        self.ensure_capacity()?;

        // INVARIANT: ensure_capacity leaves count < capacity
        self.slots[self.count] = Some(entry);
        self.count += 1;

        contracts::check_bag_well_formed(&self.slots, self.count);
        trace!(count = self.count, "added entry");
        Ok(true)
    }

    fn remove(&mut self) -> Option<T> {
        self.check_integrity();

        let last = self.count.checked_sub(1)?;
        self.remove_at(last)
    }

    fn remove_entry<'a>(&mut self, entry: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        self.check_integrity();

        let Some(entry) = entry.into() else {
            return false;
        };

        match self.index_of(entry) {
            Some(index) => self.remove_at(index).is_some(),
            None => false,
        }
    }

    fn contains<'a>(&self, entry: impl Into<Option<&'a T>>) -> bool
    where
        T: 'a,
    {
        self.check_integrity();

        entry
            .into()
            .is_some_and(|entry| self.index_of(entry).is_some())
    }

    fn frequency_of<'a>(&self, entry: impl Into<Option<&'a T>>) -> usize
    where
        T: 'a,
    {
        self.check_integrity();

        let Some(entry) = entry.into() else {
            return 0;
        };

        let frequency = self
            .populated()
            .filter(|candidate| *candidate == entry)
            .count();

        contracts::check_frequency_bounded(frequency, self.count);
        frequency
    }

    fn current_size(&self) -> usize {
        self.check_integrity();
        self.count
    }

    fn is_empty(&self) -> bool {
        self.check_integrity();
        self.count == 0
    }

    fn clear(&mut self) {
        self.check_integrity();
        self.state = State::Mutating;

        // An entry whose Drop panics leaves the state at Mutating.
        for slot in &mut self.slots[..self.count] {
            drop(slot.take());
        }
        self.count = 0;

        contracts::check_bag_well_formed(&self.slots, self.count);
        self.state = State::Valid;
        trace!(capacity = self.capacity(), "cleared bag");
    }

    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.check_integrity();
        self.populated().cloned().collect()
    }
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBag")
            .field("entries", &self.populated().collect::<Vec<_>>())
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("state", &self.state)
            .finish()
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}
