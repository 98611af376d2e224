// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for fieldfinder results.
//!
//! Ranked matches go in a box, one entry per result: label, table, column,
//! key and score. `--explain` adds the sub-score breakdown under each entry.
//! A one-line "best answer" follows so it can be copied straight out.
//!
//! Colors follow the terminal theme. `NO_COLOR` or a non-TTY stdout turns
//! them off entirely.
//!
//! # Theme detection order
//!
//! 1. `FIELDFINDER_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::collections::BTreeMap;
use std::sync::OnceLock;

use fieldfinder::{Explanation, Row, ScoreResult};

// Width between │ and │ (excluding border chars)
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

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; background colors 7 and up (except 8) are light.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    if bg >= 7 && bg != 8 {
        Some(Theme::Light)
    } else {
        Some(Theme::Dark)
    }
}

fn detect_theme() -> Theme {
    std::env::var("FIELDFINDER_THEME")
        .ok()
        .and_then(|t| parse_theme(&t))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|c| theme_from_colorfgbg(&c))
        })
        .unwrap_or(Theme::Dark)
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════
//
// OneDark: https://github.com/joshdick/onedark.vim
// One Light: https://github.com/sonph/onehalf

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
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
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

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

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length (excluding ANSI codes)
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

/// Cut plain text to `max` chars, marking the cut with "...".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Border glyphs in gray. Plain mode draws the same glyphs uncolored.
fn border(s: &str) -> String {
    themed(GRAY, &[], s)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Format a content line: │ content          │
pub fn box_row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"))
}

/// Format section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    )
}

/// Format section divider: ├──────────────────┤
pub fn section_mid() -> String {
    border(&format!("├{}┤", "─".repeat(BOX_WIDTH)))
}

/// Format section footer: └──────────────────┘
pub fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score: phrase-hit territory is green, token-only yellow,
/// zero gray, negative red.
pub fn score_value(score: i32) -> String {
    let text = format!("{:>4}", score);
    if score >= 8 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score > 0 {
        themed(YELLOW, &[], &text)
    } else if score == 0 {
        themed(GRAY, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

/// Label/value line inside a result entry.
fn field_line(label: &str, value: &str) -> String {
    let label = themed(GRAY, &[], &format!("{:<7}", label));
    let width = BOX_WIDTH.saturating_sub(5 + 7 + 1);
    box_row(&format!("     {} {}", label, truncate(value, width)))
}

/// Sub-score breakdown: `syn_phrase_hit=9 token_overlap=6 entity_bonus=4`
pub fn explanation_line(why: &Explanation) -> String {
    let mut parts: Vec<String> = why
        .entries()
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    if let Some(phrase) = &why.matched_phrase {
        parts.push(format!("phrase=\"{}\"", phrase));
    }
    if let Some(entity) = why.hinted_entity {
        parts.push(format!("hint={}", entity));
    }
    parts.join(" ")
}

/// The copyable one-liner: `<common> | <report>`
pub fn best_answer(row: &Row) -> String {
    format!("{} | {}", row.common, row.report)
}

/// Lines for the ranked result box.
pub fn result_lines(results: &[ScoreResult<'_>], explain: bool) -> Vec<String> {
    let mut lines = vec![section_top("Top matches")];
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            lines.push(section_mid());
        }
        let rank = themed(BLUE, &[BOLD], &format!("{:>2}.", i + 1));
        let label_width = BOX_WIDTH.saturating_sub(4 + 1 + 1 + 4 + 7);
        let label = themed(GREEN, &[BOLD], &truncate(&result.row.common, label_width));
        let head = format!(" {} {}", rank, label);
        let tail = format!("score {}", score_value(result.score));
        let gap = BOX_WIDTH.saturating_sub(visible_len(&head) + visible_len(&tail) + 1);
        lines.push(box_row(&format!("{}{}{} ", head, " ".repeat(gap), tail)));

        lines.push(field_line("Table", &result.row.report));
        lines.push(field_line("Column", &result.row.keyword));
        lines.push(field_line("Key", &result.row.full_key));
        if explain {
            lines.push(field_line("Why", &explanation_line(&result.explanation)));
        }
    }
    lines.push(section_bot());
    lines
}

/// Print ranked results and the best-answer line.
pub fn print_results(results: &[ScoreResult<'_>], explain: bool) {
    if results.is_empty() {
        println!("No rows to search");
        return;
    }
    for line in result_lines(results, explain) {
        println!("{}", line);
    }
    println!();
    println!("{}", themed(CYAN, &[BOLD], "Best answer (copy)"));
    println!("{}", best_answer(results[0].row));
}

/// Per-entity row counts, keyed by the entity tag as written (trimmed).
pub fn entity_counts(rows: &[Row]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        let entity = match row.entity.trim() {
            "" => "(none)".to_string(),
            e => e.to_string(),
        };
        *counts.entry(entity).or_insert(0) += 1;
    }
    counts
}

/// Print a sheet summary for `inspect`.
pub fn print_inspect(path: &str, rows: &[Row]) {
    println!("{}", section_top("Cheat sheet"));
    println!("{}", box_row(&format!(" File     {}", truncate(path, BOX_WIDTH - 11))));
    println!("{}", box_row(&format!(" Rows     {}", rows.len())));
    let without_synonyms = rows.iter().filter(|r| r.synonyms.trim().is_empty()).count();
    println!(
        "{}",
        box_row(&format!(" No ask phrases  {}", without_synonyms))
    );
    println!("{}", section_mid());
    for (entity, count) in entity_counts(rows) {
        println!(
            "{}",
            box_row(&format!(" {:<24} {:>6}", truncate(&entity, 24), count))
        );
    }
    println!("{}", section_bot());
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
