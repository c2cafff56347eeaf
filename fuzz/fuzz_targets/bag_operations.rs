// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! Every sequence is replayed against the bag and the `Vec`-backed reference
//! model. Any disagreement, panic, or broken layout is a bug.

#![no_main]

use arbitrary::Arbitrary;
use arraybag::prelude::*;
use arraybag::testing::{apply_op, BagOp, ReferenceBag};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Add(Option<u8>),
    Remove,
    RemoveEntry(Option<u8>),
    Clear,
}

impl From<&FuzzOp> for BagOp<u8> {
    fn from(op: &FuzzOp) -> Self {
        match *op {
            FuzzOp::Add(entry) => BagOp::Add(entry),
            FuzzOp::Remove => BagOp::Remove,
            FuzzOp::RemoveEntry(entry) => BagOp::RemoveEntry(entry),
            FuzzOp::Clear => BagOp::Clear,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: i16,
    ops: Vec<FuzzOp>,
}

fuzz_target!(|input: Input| {
    let capacity = i64::from(input.capacity);

    // Property 1: construction agrees with the reference on what is valid
    let (mut bag, mut oracle) = match (
        ArrayBag::<u8>::with_capacity(capacity),
        ReferenceBag::<u8>::with_capacity(capacity),
    ) {
        (Ok(bag), Ok(oracle)) => (bag, oracle),
        (Err(a), Err(b)) => {
            assert_eq!(a, b);
            return;
        }
        (bag, oracle) => panic!(
            "construction disagrees for {}: {:?} vs {:?}",
            capacity,
            bag.map(|b| b.capacity()),
            oracle.map(|o| o.capacity())
        ),
    };

    for op in &input.ops {
        let op = BagOp::from(op);

        // Property 2: every result matches, including capacity errors
        assert_eq!(apply_op(&mut bag, &op), oracle.apply(&op), "{:?}", op);

        // Property 3: layout invariants hold after every step
        assert_eq!(bag.verify(), Ok(()));
        assert_eq!(bag.current_size(), oracle.len());
        assert_eq!(bag.capacity(), oracle.capacity());
    }

    // Property 4: snapshot order is identical, not just the multiset
    assert_eq!(bag.to_array(), oracle.entries());
});
