// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the command script parser and runner.
//!
//! Arbitrary text must either parse or fail with a line number inside the
//! input. Parsed scripts must run to completion without panicking.

#![no_main]

use arraybag::script::{parse_script, run, Outcome};
use arraybag::ArrayBag;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    match parse_script(source) {
        Ok(commands) => {
            let mut bag: ArrayBag<String> = ArrayBag::new();
            let outcomes = run(&mut bag, &commands);
            assert_eq!(outcomes.len(), commands.len());

            // The only runtime failure a script can hit is the growth ceiling
            for outcome in &outcomes {
                if let Outcome::Error { message } = outcome {
                    assert!(message.starts_with("desired capacity is too large"));
                }
            }
            assert_eq!(bag.verify(), Ok(()));
        }
        Err(error) => {
            assert!(error.line >= 1);
            assert!(error.line <= source.lines().count());
        }
    }
});
