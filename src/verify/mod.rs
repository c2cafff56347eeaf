// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked layout** (`check_layout`, `ArrayBag::verify`) that reports a
//!    violated invariant as a value the caller can inspect.
//!
//! 2. **Runtime contracts** that panic in debug builds when the bag's own
//!    mutations break an invariant. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
