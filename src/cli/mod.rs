// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the arraybag command-line interface.
//!
//! Two subcommands: `run` executes a command script against a fresh bag, and
//! `demo` runs the built-in walkthrough. Both print one line per command, or
//! a JSON report with `--json`.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "arraybag",
    about = "Drive an array-backed bag from command scripts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command script against a new bag
    Run {
        /// Script file (reads stdin when omitted)
        file: Option<String>,

        /// Initial capacity of the bag
        ///
        /// Must be in 1..=10000. Defaults to 10.
        #[arg(short, long, allow_negative_numbers = true)]
        capacity: Option<i64>,

        /// Print a JSON report instead of one line per command
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in walkthrough script
    Demo {
        /// Print a JSON report instead of one line per command
        #[arg(long)]
        json: bool,
    },
}
