// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a song index.
//!
//! Raw records ([`Song`], [`Creator`]) arrive from the catalog document and are
//! never mutated. The indexer wraps each one in an [`IndexedSong`] that carries
//! the derived, searchable variants alongside the original text.
//!
//! # Invariants
//!
//! - **Song**: `titles` is non-empty; `titles[0]` is the primary title.
//!
//! - **IndexedSong**: every `Vec<TextVariants>` is parallel to the raw field it
//!   derives from (`song.titles[i]` ↔ `titles[i]`, and so on). Breaking the
//!   alignment silently attaches romanizations to the wrong title.
//!
//! - **IndexedSong::words**: each token appears once, in first-seen order.
//!   `words_index` is exactly `words.join(" ")`.
//!
//! - **IndexedCatalog**: rebuilt wholesale, never patched. Position in `songs`
//!   is the hit index handed around by the matcher.

use serde::{Deserialize, Serialize};

/// Someone credited on a song, with the other names they go by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// One catalog entry, exactly as the catalog document describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    /// First entry is the primary title.
    pub titles: Vec<String>,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub related_info: Vec<String>,
    #[serde(default)]
    pub extra_info: Option<String>,
    /// Page for the song. Carried through, never searched.
    #[serde(default)]
    pub path: Option<String>,
    /// Audio file location. Carried through, never searched.
    #[serde(default)]
    pub audio_path: Option<String>,
}

impl Song {
    pub fn primary_title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or("")
    }
}

/// The static catalog document: `{ "songs": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub songs: Vec<Song>,
}

/// Searchable variants of one piece of text.
///
/// For text containing Han characters `romanized` is the tone-free pinyin with
/// syllables concatenated and `initials` the first letter of each syllable.
/// Anything else is just lowercased and has no initials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextVariants {
    pub romanized: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

/// Derived fields for one creator, parallel to [`Creator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedCreator {
    pub name: TextVariants,
    /// Parallel to `Creator::aliases`.
    pub aliases: Vec<TextVariants>,
}

/// A song plus everything the matcher needs to find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedSong {
    pub song: Song,
    pub titles: Vec<TextVariants>,
    /// Parallel to `song.creators`.
    pub creators: Vec<IndexedCreator>,
    pub related_info: Vec<TextVariants>,
    pub extra_info: Option<TextVariants>,
    /// Deduplicated tokens in first-seen order.
    pub words: Vec<String>,
    /// `words` joined with single spaces: the text the matcher sees.
    pub words_index: String,
}

impl IndexedSong {
    pub fn id(&self) -> &str {
        &self.song.id
    }

    /// Does the word index contain this exact token?
    pub fn has_word(&self, token: &str) -> bool {
        self.words.iter().any(|w| w == token)
    }
}

/// The read-only product of the indexer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedCatalog {
    pub songs: Vec<IndexedSong>,
}

impl IndexedCatalog {
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&IndexedSong> {
        self.songs.iter().find(|s| s.song.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.songs.iter().position(|s| s.song.id == id)
    }
}
