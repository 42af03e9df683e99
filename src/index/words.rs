// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-song word index.
//!
//! For each text element of a song (titles, creator names, aliases, related
//! info, extra info):
//!
//! - **CJK**: every 1-, 2-, 3- and 4-character substring as written, spaces
//!   and Latin letters included, plus its lowercase form; each pinyin
//!   syllable, the full romanization and the initials.
//! - **Everything else**: lowercase words split on the separator class in
//!   [`crate::utils::is_word_separator`], plus the whole lowercased element.
//!
//! Entries are deduplicated in first-seen order. Only presence matters to the
//! matcher, but a stable order keeps rebuilds byte-identical.

use std::collections::HashSet;

use crate::romanize::{contains_cjk, Romanizer};
use crate::types::Song;
use crate::utils::split_words;

/// Longest n-gram emitted for CJK text. Four characters covers chengyu.
pub const MAX_NGRAM: usize = 4;

/// Insertion-ordered set of index entries.
#[derive(Debug, Default)]
struct WordSet {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl WordSet {
    fn insert(&mut self, word: String) {
        if word.is_empty() || self.seen.contains(&word) {
            return;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
    }
}

/// All textual elements of a song in indexing order.
pub fn song_elements(song: &Song) -> Vec<&str> {
    let mut elements: Vec<&str> = song.titles.iter().map(String::as_str).collect();
    elements.extend(song.creators.iter().map(|c| c.name.as_str()));
    elements.extend(
        song.creators
            .iter()
            .flat_map(|c| c.aliases.iter().map(String::as_str)),
    );
    elements.extend(song.related_info.iter().map(String::as_str));
    if let Some(extra) = song.extra_info.as_deref() {
        elements.push(extra);
    }
    elements
}

/// Build the deduplicated word list for one song.
pub fn build_words(song: &Song, romanizer: &dyn Romanizer) -> Vec<String> {
    let mut set = WordSet::default();

    for element in song_elements(song) {
        if element.trim().is_empty() {
            continue;
        }
        if contains_cjk(element) {
            push_cjk(&mut set, element, romanizer);
        } else {
            push_latin(&mut set, element);
        }
    }

    set.words
}

fn push_cjk(set: &mut WordSet, element: &str, romanizer: &dyn Romanizer) {
    let chars: Vec<char> = element.chars().collect();

    for n in 1..=MAX_NGRAM {
        for gram in ngrams(&chars, n) {
            let lower = gram.to_lowercase();
            set.insert(gram);
            set.insert(lower);
        }
    }

    let syllables = romanizer.syllables(element);
    let full = syllables.concat();
    let initials: String = syllables.iter().filter_map(|s| s.chars().next()).collect();
    for syllable in syllables {
        set.insert(syllable);
    }
    set.insert(full);
    set.insert(initials);
}

fn push_latin(set: &mut WordSet, element: &str) {
    for word in split_words(element) {
        set.insert(word);
    }
    set.insert(element.to_lowercase());
}

/// Contiguous `n`-character windows of `chars`, exactly as written.
pub fn ngrams(chars: &[char], n: usize) -> impl Iterator<Item = String> + '_ {
    chars
        .windows(n.max(1))
        .filter(move |_| n > 0)
        .map(|w| w.iter().collect())
}
