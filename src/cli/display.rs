// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the songdex CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `SONGDEX_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! and non-TTY output turn color off entirely so piped output stays clean.
//!
//! Widths are measured in terminal columns, not chars: CJK ideographs take two
//! columns, and a box drawn with char counts would have a ragged right edge.

use std::ops::Range;
use std::sync::OnceLock;

use songdex::{FieldKey, Suggestion};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SONGDEX_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8, dark gray) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// Semantic color roles; the palette decides the actual RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Accent,
    Title,
    Creator,
    Info,
    Highlight,
    Good,
    Fair,
    Poor,
    Muted,
    Border,
}

type Rgb = (u8, u8, u8);

/// OneDark: https://github.com/joshdick/onedark.vim
fn onedark(role: Role) -> Rgb {
    match role {
        Role::Accent => (102, 217, 239),
        Role::Title => (152, 195, 121),
        Role::Creator => (198, 120, 221),
        Role::Info => (86, 182, 194),
        Role::Highlight => (255, 215, 0),
        Role::Good => (166, 226, 46),
        Role::Fair => (229, 192, 123),
        Role::Poor => (224, 108, 117),
        Role::Muted | Role::Border => (92, 99, 112),
    }
}

/// One Light: https://github.com/sonph/onehalf
fn onelight(role: Role) -> Rgb {
    match role {
        Role::Accent => (1, 112, 158),
        Role::Title => (80, 161, 79),
        Role::Creator => (166, 38, 164),
        Role::Info => (1, 132, 188),
        Role::Highlight => (152, 104, 1),
        Role::Good => (68, 140, 39),
        Role::Fair => (193, 132, 1),
        Role::Poor => (228, 86, 73),
        Role::Muted | Role::Border => (160, 161, 167),
    }
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn escape_for(role: Role) -> String {
    match theme() {
        Theme::Dark => rgb(onedark(role)),
        Theme::Light => rgb(onelight(role)),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Paint `text` in a role color with optional modifiers.
pub fn paint(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), escape_for(role), text, RESET)
    } else {
        text.to_string()
    }
}

/// Terminal columns a char occupies.
fn char_width(c: char) -> usize {
    if songdex::romanize::is_cjk(c)
        || matches!(c, '\u{3000}'..='\u{303f}' | '\u{ff00}'..='\u{ff60}' | '\u{3040}'..='\u{30ff}')
    {
        2
    } else {
        1
    }
}

/// Visible width in columns, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += char_width(c);
        }
    }
    len
}

/// Cut plain text to at most `width` columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if visible_len(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

fn border() -> String {
    if use_colors() {
        escape_for(Role::Border)
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (b, r) = (border(), reset());
    println!("{b}│{r}{content}{}{b}│{r}", " ".repeat(pad));
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

fn section_line(left: char, right: char, label: &str) {
    let label_part = format!("─ {} ", paint(Role::Accent, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    println!("{b}{left}{r}{label_part}{b}{}{right}{r}", "─".repeat(remaining));
}

/// └──────────────────┘
pub fn section_bot() {
    let (b, r) = (border(), reset());
    println!("{b}└{}┘{r}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Sort and merge overlapping or touching spans.
pub fn merge_spans(spans: &[Range<usize>]) -> Vec<Range<usize>> {
    let mut sorted: Vec<Range<usize>> = spans.iter().filter(|s| !s.is_empty()).cloned().collect();
    sorted.sort_by_key(|s| s.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Highlight char ranges of `text`. Without colors the spans are bracketed.
pub fn highlight(text: &str, spans: &[Range<usize>]) -> String {
    if use_colors() {
        let open = format!("{}{}", UNDERLINE, escape_for(Role::Highlight));
        mark(text, spans, &open, RESET)
    } else {
        mark(text, spans, "[", "]")
    }
}

/// Wrap every merged span of `text` (char offsets) in `open`/`close`.
fn mark(text: &str, spans: &[Range<usize>], open: &str, close: &str) -> String {
    let merged = merge_spans(spans);
    let mut out = String::with_capacity(text.len() + merged.len() * (open.len() + close.len()));
    let mut spans = merged.iter().peekable();
    for (i, c) in text.chars().enumerate() {
        if spans.peek().is_some_and(|s| s.start == i) {
            out.push_str(open);
        }
        out.push(c);
        if spans.peek().is_some_and(|s| s.end == i + 1) {
            out.push_str(close);
            spans.next();
        }
    }
    // A span running past the end of the text still needs closing.
    if spans.peek().is_some_and(|s| s.start < text.chars().count()) {
        out.push_str(close);
    }
    out
}

/// Fuzzy score, 0 = perfect. Green when close, red when barely in.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.4}", score);
    let role = if score < 0.001 {
        Role::Good
    } else if score < 0.1 {
        Role::Fair
    } else {
        Role::Poor
    };
    paint(role, &[], &text)
}

/// Field path colored by what kind of field it is.
pub fn key_label(key: FieldKey) -> String {
    let role = match key {
        FieldKey::Titles | FieldKey::TitlesPinyin | FieldKey::TitlesPinyinInitials => Role::Title,
        FieldKey::CreatorName
        | FieldKey::CreatorNamePinyin
        | FieldKey::CreatorNamePinyinInitials
        | FieldKey::CreatorAliases
        | FieldKey::CreatorAliasesPinyin
        | FieldKey::CreatorAliasesPinyinInitials => Role::Creator,
        FieldKey::ExtraInfo
        | FieldKey::ExtraInfoPinyin
        | FieldKey::RelatedInfo
        | FieldKey::RelatedInfoPinyin => Role::Info,
        FieldKey::WordsIndex => Role::Muted,
    };
    paint(role, &[], key.path())
}

/// Short colored tag for a suggestion's category.
pub fn suggestion_badge(suggestion: &Suggestion) -> String {
    let (role, tag) = match suggestion {
        Suggestion::Title { .. } => (Role::Title, "[title]"),
        Suggestion::Creator { .. } => (Role::Creator, "[creator]"),
        Suggestion::CreatorAlias { .. } => (Role::Creator, "[alias]"),
        Suggestion::History { .. } => (Role::Muted, "[history]"),
    };
    paint(role, &[], tag)
}
