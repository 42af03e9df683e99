//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Characters that separate words in Latin text.
///
/// Whitespace plus: `- _ . , ; : ! ? ( ) [ ] { } ' " / \ & + = # $ % @ | < >`
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '-' | '_'
                | '.'
                | ','
                | ';'
                | ':'
                | '!'
                | '?'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '\''
                | '"'
                | '/'
                | '\\'
                | '&'
                | '+'
                | '='
                | '#'
                | '$'
                | '%'
                | '@'
                | '|'
                | '<'
                | '>'
        )
}

/// Lowercase words of `text`, split on [`is_word_separator`], empties dropped.
pub fn split_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_word_separator)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Escape the five HTML-significant characters.
///
/// `&` goes first so already-produced entities are not escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Fold one character for comparison: lowercase, optionally strip diacritics.
///
/// Always returns exactly one char so offsets computed on folded text line up
/// with the original. Characters whose lowercase or decomposition expands to
/// several non-mark characters (Hangul syllables, `İ`) keep their first one.
pub fn fold_char(c: char, ignore_diacritics: bool) -> char {
    let base = if ignore_diacritics { strip_diacritic(c) } else { c };
    base.to_lowercase().next().unwrap_or(base)
}

/// Fold a whole string into chars, one per input char.
pub fn fold_chars(text: &str, ignore_diacritics: bool) -> Vec<char> {
    text.chars().map(|c| fold_char(c, ignore_diacritics)).collect()
}

/// Remove combining marks from a single character: "é" → "e", "ō" → "o".
///
/// Uses NFD decomposition. Only applied when the decomposition is one base
/// character plus marks; anything else comes back untouched.
#[cfg(feature = "unicode-normalization")]
fn strip_diacritic(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let mut bases = std::iter::once(c).nfd().filter(|d| !is_combining_mark(*d));
    match (bases.next(), bases.next()) {
        (Some(base), None) => base,
        _ => c,
    }
}

/// Without unicode-normalization we cannot decompose; leave the char alone.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritic(c: char) -> char {
    c
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
