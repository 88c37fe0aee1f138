// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the kosha CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. Detection tries `KOSHA_THEME` first,
//! then `COLORFGBG`, then macOS system appearance, then defaults to dark.
//! Respects `NO_COLOR` and falls back to plain text when stdout isn't a TTY.

use kosha::{MatchKind, PrefixPattern};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via KOSHA_THEME
    if let Ok(theme) = std::env::var("KOSHA_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. macOS: Check system appearance
    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
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

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const UNDERLINE: &str = "\x1b[4m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` chars, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    if use_colors() {
        println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
    } else {
        println!("│{}{}│", content, " ".repeat(pad));
    }
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    if use_colors() {
        let border = GRAY();
        println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
    } else {
        println!("┌{}{}┐", label_part, "─".repeat(remaining));
    }
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    if use_colors() {
        println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
    } else {
        println!("└{}┘", "─".repeat(BOX_WIDTH));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded match kind badge: `[exact]`, `[prefix]`, ...
pub fn match_badge(kind: MatchKind) -> String {
    let label = format!("[{}]", kind.label());
    match kind {
        MatchKind::Exact => themed(GREEN, &[BOLD], &label),
        MatchKind::Prefix => themed(BLUE, &[], &label),
        MatchKind::Fuzzy => themed(MAGENTA, &[], &label),
        MatchKind::Definition => themed(YELLOW, &[], &label),
    }
}

/// Color-coded tier label
pub fn tier_label(tier: u8) -> String {
    let label = format!("T{}", tier);
    match tier {
        1 => themed(GREEN, &[], &label),
        2 => themed(BLUE, &[], &label),
        3 => themed(MAGENTA, &[], &label),
        _ => label,
    }
}

/// Color-coded timing value in microseconds (green=fast, yellow=medium, red=slow)
pub fn timing_us(value: f64) -> String {
    let text = format!("{:.1}µs", value);
    if value < 100.0 {
        themed(GREEN, &[], &text)
    } else if value < 1000.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

/// Split `word` around the first case-insensitive occurrence of `query`.
///
/// Returns `(before, matched, after)`, or `None` when the query doesn't occur
/// literally (fuzzy and diacritic-folded hits).
pub fn split_match<'a>(word: &'a str, query: &str) -> Option<(&'a str, &'a str, &'a str)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    let lowered = |c: char| c.to_lowercase().next().unwrap_or(c);
    let indices: Vec<(usize, char)> = word.char_indices().collect();

    for start in 0..indices.len() {
        let end = start + needle.len();
        if end > indices.len() {
            break;
        }
        let hit = indices[start..end]
            .iter()
            .zip(&needle)
            .all(|(&(_, c), &n)| lowered(c) == n);
        if hit {
            let from = indices[start].0;
            let to = indices.get(end).map_or(word.len(), |&(i, _)| i);
            return Some((&word[..from], &word[from..to], &word[to..]));
        }
    }
    None
}

/// Split `text` at byte offsets `start..end`, or `None` if the range is empty
/// or not on char boundaries.
pub fn split_span(text: &str, start: usize, end: usize) -> Option<(&str, &str, &str)> {
    if start >= end {
        return None;
    }
    Some((text.get(..start)?, text.get(start..end)?, text.get(end..)?))
}

fn underline(parts: Option<(&str, &str, &str)>, text: &str) -> String {
    match parts {
        Some((before, matched, after)) if use_colors() => format!(
            "{}{}{}{}{}{}",
            before,
            UNDERLINE,
            BRIGHT_CYAN(),
            matched,
            RESET,
            after
        ),
        _ => text.to_string(),
    }
}

/// Text with the byte range `start..end` underlined.
pub fn highlight_span(text: &str, start: usize, end: usize) -> String {
    underline(split_span(text, start, end), text)
}

/// Text with the first literal, case-insensitive occurrence of `query`
/// underlined.
pub fn highlight_match(text: &str, query: &str) -> String {
    underline(split_match(text, query), text)
}

/// Headword as it should be shown for a result of `kind`.
///
/// Exact hits are underlined whole. Prefix hits underline the span the
/// diacritic-aware pattern matched, so "kaks" marks "kàks" in "kàksi".
/// Fuzzy hits underline a literal occurrence of the query, if there is one.
pub fn highlight_headword(
    word: &str,
    kind: MatchKind,
    query: &str,
    pattern: &PrefixPattern,
) -> String {
    match kind {
        MatchKind::Exact => highlight_span(word, 0, word.len()),
        MatchKind::Prefix => match pattern.prefix_end(word) {
            Some(end) => highlight_span(word, 0, end),
            None => word.to_string(),
        },
        MatchKind::Fuzzy => highlight_match(word, query),
        MatchKind::Definition => word.to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
