//! An unordered multiset ("bag") backed by a manually grown array.
//!
//! The bag stores entries in a densely packed prefix of a fixed-length slot
//! array. Adding appends; removing swaps the target with the last entry; a full
//! array doubles, up to a hard ceiling of [`MAX_CAPACITY`] slots.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   bag.rs    │────▶│ array_bag.rs │────▶│  script.rs  │
//! │ (Bag trait) │     │  (ArrayBag)  │     │ (CLI driver)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                        │          │
//!                        ▼          ▼
//! ┌──────────────────────────┐ ┌────────────────────────────┐
//! │       capacity.rs        │ │         verify/            │
//! │ (check_capacity, growth) │ │ (InvariantError, contracts)│
//! └──────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use arraybag::prelude::*;
//!
//! let mut bag: ArrayBag<&str> = ArrayBag::new();
//! bag.add("a")?;
//! bag.add("b")?;
//! bag.add("a")?;
//! assert_eq!(bag.frequency_of(&"a"), 2);
//!
//! assert!(bag.remove_entry(&"a"));
//! assert_eq!(bag.current_size(), 2);
//!
//! // Absent entries are never stored
//! assert_eq!(bag.add(None), Ok(false));
//! # Ok::<(), arraybag::CapacityError>(())
//! ```

// Module declarations
mod array_bag;
mod bag;
pub mod capacity;
pub mod script;
mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use array_bag::ArrayBag;
pub use bag::Bag;
pub use capacity::{check_capacity, CapacityError, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use utils::group_thousands;
pub use verify::{IntegrityError, InvariantError};

/// The bag trait and its array-backed implementation.
pub mod prelude {
    pub use crate::{ArrayBag, Bag};
}
