//! Test utilities shared across unit tests, integration tests, and fuzzing.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::bag::Bag;
use crate::capacity::{check_capacity, grown_capacity, CapacityError, DEFAULT_CAPACITY};

/// An element whose `Drop` panics once, if armed.
///
/// Used to interrupt `clear` halfway through and observe the poisoned state.
#[derive(Debug, PartialEq, Eq)]
pub struct DropBomb {
    pub id: u32,
    armed: bool,
}

impl DropBomb {
    /// An element that panics when dropped.
    pub fn armed(id: u32) -> Self {
        Self { id, armed: true }
    }

    /// An element that drops normally.
    pub fn inert(id: u32) -> Self {
        Self { id, armed: false }
    }
}

impl Drop for DropBomb {
    fn drop(&mut self) {
        if self.armed && !std::thread::panicking() {
            self.armed = false;
            panic!("DropBomb {} went off", self.id);
        }
    }
}

/// One operation against a bag, in a form both a bag and the oracle accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagOp<T> {
    Add(Option<T>),
    Remove,
    RemoveEntry(Option<T>),
    Clear,
}

/// Naive multiset with the same observable semantics as `ArrayBag`.
///
/// Entries live in a plain `Vec`, removals use `Vec::swap_remove`, and the
/// capacity is only simulated so that growth failures can be predicted.
#[derive(Debug, Clone)]
pub struct ReferenceBag<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T: PartialEq + Clone> ReferenceBag<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(initial_capacity: i64) -> Result<Self, CapacityError> {
        Ok(Self {
            entries: Vec::new(),
            capacity: check_capacity(initial_capacity)?,
        })
    }

    pub fn add(&mut self, entry: Option<T>) -> Result<bool, CapacityError> {
        let Some(entry) = entry else {
            return Ok(false);
        };
        if self.entries.len() == self.capacity {
            self.capacity = grown_capacity(self.capacity)?;
        }
        self.entries.push(entry);
        Ok(true)
    }

    pub fn remove(&mut self) -> Option<T> {
        self.entries.pop()
    }

    pub fn remove_entry(&mut self, entry: Option<&T>) -> bool {
        let Some(entry) = entry else {
            return false;
        };
        match self.entries.iter().position(|candidate| candidate == entry) {
            Some(index) => {
                self.entries.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn frequency_of(&self, entry: &T) -> usize {
        self.entries.iter().filter(|candidate| *candidate == entry).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in the same internal order `ArrayBag` keeps them.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Apply an operation, returning a comparable summary of its result.
    pub fn apply(&mut self, op: &BagOp<T>) -> OpResult<T> {
        match op {
            BagOp::Add(entry) => OpResult::Added(self.add(entry.clone())),
            BagOp::Remove => OpResult::Removed(self.remove()),
            BagOp::RemoveEntry(entry) => OpResult::RemovedEntry(self.remove_entry(entry.as_ref())),
            BagOp::Clear => {
                self.clear();
                OpResult::Cleared
            }
        }
    }
}

impl<T: PartialEq + Clone> Default for ReferenceBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying a [`BagOp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpResult<T> {
    Added(Result<bool, CapacityError>),
    Removed(Option<T>),
    RemovedEntry(bool),
    Cleared,
}

/// Apply an operation to any bag.
pub fn apply_op<T, B>(bag: &mut B, op: &BagOp<T>) -> OpResult<T>
where
    T: PartialEq + Clone,
    B: Bag<T>,
{
    match op {
        BagOp::Add(entry) => OpResult::Added(bag.add(entry.clone())),
        BagOp::Remove => OpResult::Removed(bag.remove()),
        BagOp::RemoveEntry(entry) => OpResult::RemovedEntry(bag.remove_entry(entry.as_ref())),
        BagOp::Clear => {
            bag.clear();
            OpResult::Cleared
        }
    }
}

/// Sort a snapshot so that two bags can be compared as multisets.
pub fn sorted<T: Ord>(mut entries: Vec<T>) -> Vec<T> {
    entries.sort_unstable();
    entries
}
