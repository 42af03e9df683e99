// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Romanization: Han characters to pinyin syllables.
//!
//! Users type `kanong` or `kn` when they mean 卡农, so every CJK field gets a
//! romanized twin. The romanizer is a trait so the indexer does not care where
//! the syllables come from; [`PinyinRomanizer`] backs it with the `pinyin`
//! crate's dictionary.
//!
//! Non-Han runs inside mixed text become one lowercase syllable each, so
//! `D卡农` romanizes to `dkanong` with initials `dkn`.

use pinyin::ToPinyin;

use crate::types::TextVariants;

/// Text to romanized syllables.
pub trait Romanizer {
    /// Lowercase, tone-free syllables in reading order.
    fn syllables(&self, text: &str) -> Vec<String>;

    /// Syllables concatenated: "卡农" → "kanong".
    fn romanize(&self, text: &str) -> String {
        self.syllables(text).concat()
    }

    /// First letter of each syllable: "卡农" → "kn".
    fn initials(&self, text: &str) -> String {
        self.syllables(text)
            .iter()
            .filter_map(|s| s.chars().next())
            .collect()
    }
}

/// Dictionary-backed pinyin romanizer. Polyphonic characters take the
/// dictionary's most common reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
    fn syllables(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut run = String::new();

        for c in text.chars() {
            match c.to_pinyin() {
                Some(py) => {
                    flush(&mut run, &mut out);
                    out.push(py.plain().to_string());
                }
                None if c.is_alphanumeric() => run.extend(c.to_lowercase()),
                None => flush(&mut run, &mut out),
            }
        }
        flush(&mut run, &mut out);
        out
    }
}

fn flush(run: &mut String, out: &mut Vec<String>) {
    if !run.is_empty() {
        out.push(std::mem::take(run));
    }
}

/// CJK Unified Ideographs and Extension A.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}')
}

/// Does the text contain at least one CJK ideograph?
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Derive the searchable variants of one field value.
pub fn text_variants(romanizer: &dyn Romanizer, text: &str) -> TextVariants {
    if contains_cjk(text) {
        let syllables = romanizer.syllables(text);
        TextVariants {
            romanized: syllables.concat(),
            initials: Some(syllables.iter().filter_map(|s| s.chars().next()).collect()),
        }
    } else {
        TextVariants {
            romanized: text.to_lowercase(),
            initials: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("卡农"));
        assert!(contains_cjk("Da Capo (伴奏)"));
        assert!(!contains_cjk("Canon in D"));
        assert!(!contains_cjk(""));
    }

    #[test]
    fn test_pinyin_syllables() {
        let r = PinyinRomanizer;
        assert_eq!(r.syllables("卡农"), vec!["ka", "nong"]);
        assert_eq!(r.romanize("月晕"), "yueyun");
        assert_eq!(r.initials("月晕"), "yy");
    }

    #[test]
    fn test_mixed_text_groups_latin_runs() {
        let r = PinyinRomanizer;
        assert_eq!(r.syllables("D卡农"), vec!["d", "ka", "nong"]);
        assert_eq!(r.syllables("Da Capo (伴奏)"), vec!["da", "capo", "ban", "zou"]);
    }

    #[test]
    fn test_text_variants_latin_is_lowercase_only() {
        let v = text_variants(&PinyinRomanizer, "Canon in D");
        assert_eq!(v.romanized, "canon in d");
        assert_eq!(v.initials, None);
    }

    #[test]
    fn test_text_variants_cjk() {
        let v = text_variants(&PinyinRomanizer, "返始");
        assert_eq!(v.romanized, "fanshi");
        assert_eq!(v.initials.as_deref(), Some("fs"));
    }
}
