// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the scout CLI.
//!
//! Record cards drawn with box characters, in OneDark for dark terminals and
//! One Light for light ones. The detection tries `SCOUT_THEME` first (for
//! explicit control), then `COLORFGBG` (set by some terminals), then defaults
//! to dark. Respects `NO_COLOR` and drops colors when stdout is not a TTY.
//!
//! # Theme detection order
//!
//! 1. `SCOUT_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use scout::{MatchField, PlatformKind, Record};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

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

/// Parse an explicit theme name.
fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Interpret a `COLORFGBG` value ("fg;bg", bg 7+ except 8 is light).
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    std::env::var("SCOUT_THEME")
        .ok()
        .and_then(|value| parse_theme(&value))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| theme_from_colorfgbg(&value))
        })
        .unwrap_or(Theme::Dark)
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
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

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

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

/// Border color, or nothing when colors are off
fn border_color(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

/// Reset sequence, or nothing when colors are off
fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
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

/// Truncate plain text to `max` characters, ending in … when cut
pub fn truncate(text: &str, max: usize) -> String {
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
    let border = border_color(GRAY);
    let len = visible_len(content);
    let pad = BOX_WIDTH.saturating_sub(len);
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = border_color(GRAY);
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let border = border_color(GRAY);
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset());
}

/// Print double-line header: ╔══════════════════╗
pub fn double_header() {
    let border = border_color(BLUE);
    println!("{}╔{}╗{}", border, "═".repeat(BOX_WIDTH), reset());
}

/// Print double-line footer: ╚══════════════════╝
pub fn double_footer() {
    let border = border_color(BLUE);
    println!("{}╚{}╝{}", border, "═".repeat(BOX_WIDTH), reset());
}

/// Print centered title with bold
pub fn title(text: &str) {
    let border = border_color(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let len = visible_len(&colored);
    let total_pad = BOX_WIDTH.saturating_sub(len);
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        reset()
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Display label for a platform name, falling back to the raw name
pub fn platform_label(name: &str) -> String {
    PlatformKind::from_name(name)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Color-coded platform badge
pub fn platform_badge(name: &str) -> String {
    let label = platform_label(name);
    if !use_colors() {
        return format!("[{}]", label);
    }
    let color = match PlatformKind::from_name(name) {
        Some(PlatformKind::Instagram) => MAGENTA(),
        Some(PlatformKind::Twitter) => BLUE(),
        Some(PlatformKind::Facebook) => CYAN(),
        Some(PlatformKind::Tiktok) => RED(),
        Some(PlatformKind::Youtube) => YELLOW(),
        None => GRAY(),
    };
    format!("{}[{}]{}", color, label, RESET)
}

/// Compact follower count: 950, 12.3K, 4.1M
pub fn format_followers(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 10_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Color-coded matched-field label
pub fn match_field_label(field: MatchField) -> String {
    let label = field.as_str();
    if !use_colors() {
        return label.to_string();
    }
    match field {
        MatchField::Handle => format!("{}{}{}", GREEN(), label, RESET),
        MatchField::PrimaryTag => format!("{}{}{}", CYAN(), label, RESET),
        MatchField::SecondaryTag => format!("{}{}{}", BLUE(), label, RESET),
    }
}

/// Print one record as a card.
///
/// `matched_on` adds a line naming the field that placed the record.
pub fn record_card(record: &Record, matched_on: Option<MatchField>) {
    section_top(&format!("@{}", truncate(&record.handle, BOX_WIDTH - 8)));
    row(&format!(
        " {}  {} followers",
        platform_badge(&record.platform.name),
        themed(YELLOW, &[BOLD], &format_followers(record.followers))
    ));
    if let Some(primary) = record.primary_tag_name() {
        row(&format!(
            " primary: {}",
            themed(GREEN, &[], &truncate(primary, BOX_WIDTH - 11))
        ));
    }
    if !record.tags.is_empty() {
        let tags = record.tag_names().collect::<Vec<_>>().join(", ");
        row(&format!(
            " tags: {}",
            themed(GRAY, &[], &truncate(&tags, BOX_WIDTH - 8))
        ));
    }
    if let Some(field) = matched_on {
        row(&format!(" matched on: {}", match_field_label(field)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
