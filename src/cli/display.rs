// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the arraybag CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `ARRAYBAG_THEME` first (for explicit control), then `COLORFGBG` (set by some
//! terminals), then defaults to dark. Respects `NO_COLOR` and non-TTY stdout.

use std::sync::OnceLock;

use arraybag::script::Outcome;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("ARRAYBAG_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a color if stdout is a TTY, otherwise return plain text
pub fn color(color_fn: fn() -> String, text: &str) -> String {
    paint(color_fn, text, use_colors())
}

fn paint(color_fn: fn() -> String, text: &str, colors: bool) -> String {
    if colors {
        format!("{}{}{}", color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Bold heading line
pub fn title(text: &str) {
    if use_colors() {
        println!("{}{}{}", BOLD, text, RESET);
    } else {
        println!("{}", text);
    }
}

/// Render one outcome with its line number, colored by kind.
pub fn outcome_line(step: usize, outcome: &Outcome) -> String {
    render_outcome_line(step, outcome, use_colors())
}

fn render_outcome_line(step: usize, outcome: &Outcome, colors: bool) -> String {
    let number = paint(GRAY, &format!("{:>3}", step), colors);
    let body = outcome.to_string();
    let tint: fn() -> String = match outcome {
        Outcome::Error { .. } => RED,
        Outcome::Added { added: false }
        | Outcome::Removed { entry: None }
        | Outcome::RemovedEntry { removed: false, .. } => YELLOW,
        Outcome::Array { .. } => CYAN,
        _ => GREEN,
    };
    format!("{}  {}", number, paint(tint, &body, colors))
}
