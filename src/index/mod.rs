// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: raw catalog in, searchable songs out.
//!
//! Every text field gets romanized variants (pinyin for CJK, lowercase for the
//! rest) and every song gets a flat word index of n-grams and split words. The
//! word index is what lets a character-level fuzzy matcher find 夏天 inside
//! 夏天的风: CJK has no spaces, so without the n-grams the matcher would only
//! ever see one long token.
//!
//! Building never fails. A missing or malformed catalog yields an empty index
//! and a warning, so downstream code never has to check for one.

mod catalog;
mod words;

pub use catalog::*;
pub use words::*;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::romanize::{text_variants, PinyinRomanizer, Romanizer};
use crate::types::{Catalog, IndexedCatalog, IndexedCreator, IndexedSong, Song};

/// Build the index with the default pinyin romanizer.
///
/// `None` stands for an absent catalog and produces an empty index.
pub fn build_index(catalog: Option<&Catalog>) -> IndexedCatalog {
    build_index_with(catalog, &PinyinRomanizer)
}

/// Build the index with a caller-supplied romanizer.
///
/// Songs with no titles or with an id already seen are skipped with a warning;
/// everything else is indexed in catalog order.
pub fn build_index_with(catalog: Option<&Catalog>, romanizer: &dyn Romanizer) -> IndexedCatalog {
    let Some(catalog) = catalog else {
        warn!("no catalog supplied; building an empty index");
        return IndexedCatalog::default();
    };

    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(catalog.songs.len());
    let mut songs = Vec::with_capacity(catalog.songs.len());

    for song in &catalog.songs {
        if song.titles.is_empty() {
            warn!(song_id = %song.id, "skipping song without titles");
            continue;
        }
        if !seen_ids.insert(song.id.as_str()) {
            warn!(song_id = %song.id, "skipping song with duplicate id");
            continue;
        }
        songs.push(index_song(song, romanizer));
    }

    debug!(
        songs = songs.len(),
        skipped = catalog.songs.len() - songs.len(),
        "built song index"
    );
    IndexedCatalog { songs }
}

/// Lenient parse of a JSON catalog document followed by [`build_index`].
pub fn build_index_from_json(raw: &str) -> IndexedCatalog {
    let catalog = parse_catalog_lenient(raw);
    build_index(Some(&catalog))
}

/// Derive all searchable fields for one song.
pub fn index_song(song: &Song, romanizer: &dyn Romanizer) -> IndexedSong {
    let titles = song
        .titles
        .iter()
        .map(|t| text_variants(romanizer, t))
        .collect();

    let creators = song
        .creators
        .iter()
        .map(|c| IndexedCreator {
            name: text_variants(romanizer, &c.name),
            aliases: c
                .aliases
                .iter()
                .map(|a| text_variants(romanizer, a))
                .collect(),
        })
        .collect();

    let related_info = song
        .related_info
        .iter()
        .map(|r| text_variants(romanizer, r))
        .collect();

    let extra_info = song
        .extra_info
        .as_deref()
        .map(|e| text_variants(romanizer, e));

    let words = build_words(song, romanizer);
    let words_index = words.join(" ");

    IndexedSong {
        song: song.clone(),
        titles,
        creators,
        related_info,
        extra_info,
        words,
        words_index,
    }
}
