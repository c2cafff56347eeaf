// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented command scripts that drive a bag of strings.
//!
//! This is the harness the `arraybag` binary runs. One command per line:
//!
//! | Line            | Operation                 |
//! |-----------------|---------------------------|
//! | `add <value>`   | `add(value)`              |
//! | `add`           | `add(None)`               |
//! | `remove`        | `remove()`                |
//! | `remove <value>`| `remove_entry(value)`     |
//! | `contains <v>`  | `contains(v)`             |
//! | `frequency <v>` | `frequency_of(v)`         |
//! | `size`          | `current_size()`          |
//! | `empty`         | `is_empty()`              |
//! | `clear`         | `clear()`                 |
//! | `array`         | `to_array()`              |
//!
//! Blank lines and lines starting with `#` are skipped. A value is the rest of
//! the line after the command word, trimmed, so it may contain spaces.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::array_bag::ArrayBag;
use crate::bag::Bag;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Option<String>),
    Remove,
    RemoveEntry(String),
    Contains(String),
    Frequency(String),
    Size,
    Empty,
    Clear,
    Array,
}

/// What went wrong on a script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    UnknownCommand(String),
    MissingValue(&'static str),
    UnexpectedValue(&'static str),
}

/// A script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScriptErrorKind::UnknownCommand(word) => {
                write!(f, "line {}: unknown command '{}'", self.line, word)
            }
            ScriptErrorKind::MissingValue(command) => {
                write!(f, "line {}: '{}' needs a value", self.line, command)
            }
            ScriptErrorKind::UnexpectedValue(command) => {
                write!(f, "line {}: '{}' takes no value", self.line, command)
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// One executed command and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    Added { added: bool },
    Removed { entry: Option<String> },
    RemovedEntry { value: String, removed: bool },
    Contains { value: String, found: bool },
    Frequency { value: String, count: usize },
    Size { size: usize },
    Empty { empty: bool },
    Cleared,
    Array { entries: Vec<String> },
    Error { message: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added { added } => write!(f, "add -> {}", added),
            Outcome::Removed { entry: Some(entry) } => write!(f, "remove -> {}", entry),
            Outcome::Removed { entry: None } => write!(f, "remove -> (nothing)"),
            Outcome::RemovedEntry { value, removed } => {
                write!(f, "remove {} -> {}", value, removed)
            }
            Outcome::Contains { value, found } => write!(f, "contains {} -> {}", value, found),
            Outcome::Frequency { value, count } => write!(f, "frequency {} -> {}", value, count),
            Outcome::Size { size } => write!(f, "size -> {}", size),
            Outcome::Empty { empty } => write!(f, "empty -> {}", empty),
            Outcome::Cleared => write!(f, "clear"),
            Outcome::Array { entries } => write!(f, "array -> [{}]", entries.join(", ")),
            Outcome::Error { message } => write!(f, "error: {}", message),
        }
    }
}

/// Parse a single script line. `Ok(None)` for blank and comment lines.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let value = (!rest.is_empty()).then(|| rest.to_string());

    let error = |kind| ScriptError {
        line: line_number,
        kind,
    };
    let needs = |command: &'static str, value: Option<String>| {
        value.ok_or_else(|| error(ScriptErrorKind::MissingValue(command)))
    };
    let bare = |command: &'static str, value: &Option<String>, parsed: Command| match value {
        Some(_) => Err(error(ScriptErrorKind::UnexpectedValue(command))),
        None => Ok(parsed),
    };

    let command = match word {
        "add" => Command::Add(value),
        "remove" => match value {
            Some(value) => Command::RemoveEntry(value),
            None => Command::Remove,
        },
        "contains" => Command::Contains(needs("contains", value)?),
        "frequency" => Command::Frequency(needs("frequency", value)?),
        "size" => bare("size", &value, Command::Size)?,
        "empty" => bare("empty", &value, Command::Empty)?,
        "clear" => bare("clear", &value, Command::Clear)?,
        "array" => bare("array", &value, Command::Array)?,
        other => return Err(error(ScriptErrorKind::UnknownCommand(other.to_string()))),
    };

    Ok(Some(command))
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Execute one command against a bag.
///
/// A capacity error from `add` becomes an [`Outcome::Error`]; the bag is left
/// as it was, so execution can continue.
pub fn execute(bag: &mut ArrayBag<String>, command: &Command) -> Outcome {
    let outcome = match command {
        Command::Add(value) => match bag.add(value.clone()) {
            Ok(added) => Outcome::Added { added },
            Err(error) => Outcome::Error {
                message: error.to_string(),
            },
        },
        Command::Remove => Outcome::Removed {
            entry: bag.remove(),
        },
        Command::RemoveEntry(value) => Outcome::RemovedEntry {
            value: value.clone(),
            removed: bag.remove_entry(value),
        },
        Command::Contains(value) => Outcome::Contains {
            value: value.clone(),
            found: bag.contains(value),
        },
        Command::Frequency(value) => Outcome::Frequency {
            value: value.clone(),
            count: bag.frequency_of(value),
        },
        Command::Size => Outcome::Size {
            size: bag.current_size(),
        },
        Command::Empty => Outcome::Empty {
            empty: bag.is_empty(),
        },
        Command::Clear => {
            bag.clear();
            Outcome::Cleared
        }
        Command::Array => Outcome::Array {
            entries: bag.to_array(),
        },
    };

    debug!(?command, %outcome, "executed command");
    outcome
}

/// Execute every command in order.
pub fn run(bag: &mut ArrayBag<String>, commands: &[Command]) -> Vec<Outcome> {
    commands.iter().map(|command| execute(bag, command)).collect()
}

/// The walkthrough `arraybag demo` runs.
pub const DEMO_SCRIPT: &str = "\
# duplicates are allowed
add a
add b
add a
size
frequency a
# removes one occurrence
remove a
size
frequency a
array
# absent entries are rejected
add
size
clear
empty
remove
";
