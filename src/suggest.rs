// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions.
//!
//! A prefix fans out into three independently capped categories:
//!
//! | category | source | cap |
//! |---|---|---|
//! | titles | song titles (raw, pinyin, initials) | `ceil(limit / 2)` |
//! | creators | creator names and aliases | `floor(limit / 3)` |
//! | history | past queries containing the prefix | `floor(limit / 3)` |
//!
//! A broad fuzzy pass picks candidate songs; a plain containment check on each
//! title, name and alias then decides which of their strings are offered.
//! Within a category the first suggestion with a given text wins, and the rest
//! are sorted prefix matches first, exact matches next, shorter text last.
//!
//! The prefix is HTML-escaped before anything else touches it, and the escaped
//! form is what comes back in [`SuggestionSet::query`].

use std::collections::HashSet;

use serde::Serialize;

use crate::fuzzy::{FieldKey, FieldMatch, FuzzyMatcher, MatchSettings, RawHit};
use crate::types::{IndexedCatalog, IndexedSong, TextVariants};
use crate::utils::escape_html;

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    #[serde(rename_all = "camelCase")]
    Title {
        text: String,
        song_id: String,
        matches: Vec<FieldMatch>,
    },
    #[serde(rename_all = "camelCase")]
    Creator {
        text: String,
        song_id: String,
        creator_index: usize,
        matches: Vec<FieldMatch>,
    },
    #[serde(rename_all = "camelCase")]
    CreatorAlias {
        text: String,
        /// Display name of the creator who owns the alias.
        creator_name: String,
        song_id: String,
        creator_index: usize,
        /// Primary title of the song the alias was found on.
        song_title: String,
        matches: Vec<FieldMatch>,
    },
    History {
        text: String,
    },
}

impl Suggestion {
    pub fn text(&self) -> &str {
        match self {
            Suggestion::Title { text, .. }
            | Suggestion::Creator { text, .. }
            | Suggestion::CreatorAlias { text, .. }
            | Suggestion::History { text } => text,
        }
    }
}

/// Suggestions grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuggestionSet {
    /// The escaped, lowercased prefix the suggestions were computed for.
    pub query: String,
    pub titles: Vec<Suggestion>,
    pub creators: Vec<Suggestion>,
    pub history: Vec<Suggestion>,
}

impl SuggestionSet {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty() && self.creators.is_empty() && self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.titles.len() + self.creators.len() + self.history.len()
    }
}

/// Per-category caps for a limit: `(titles, creators, history)`.
pub fn category_caps(limit: usize) -> (usize, usize, usize) {
    (limit.div_ceil(2), limit / 3, limit / 3)
}

/// Builds [`SuggestionSet`]s with its own, broader matcher.
#[derive(Debug, Clone)]
pub struct Suggester {
    matcher: FuzzyMatcher,
}

impl Suggester {
    pub fn new(settings: MatchSettings) -> Self {
        Self {
            matcher: FuzzyMatcher::with_equal_weights(&FieldKey::SUGGEST, settings),
        }
    }

    /// Suggestions for `prefix`. `history` is `None` when history is disabled.
    pub fn suggest(
        &self,
        catalog: &IndexedCatalog,
        history: Option<&[String]>,
        prefix: &str,
        limit: usize,
    ) -> SuggestionSet {
        if prefix.trim().is_empty() {
            return SuggestionSet::default();
        }
        let needle = escape_html(prefix).to_lowercase();

        let mut hits = self.matcher.search(catalog, &needle);
        hits.sort_by(|a, b| a.score.total_cmp(&b.score));

        let mut titles = Vec::new();
        let mut creators = Vec::new();
        for hit in &hits {
            let Some(song) = catalog.songs.get(hit.position) else {
                continue;
            };
            collect_titles(song, hit, &needle, &mut titles);
            collect_creators(song, hit, &needle, &mut creators);
        }

        let history: Vec<Suggestion> = history
            .unwrap_or_default()
            .iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .map(|entry| Suggestion::History {
                text: entry.clone(),
            })
            .collect();

        let (title_cap, creator_cap, history_cap) = category_caps(limit);
        SuggestionSet {
            titles: finalize(titles, &needle, title_cap),
            creators: finalize(creators, &needle, creator_cap),
            history: finalize(history, &needle, history_cap),
            query: needle,
        }
    }
}

/// Does any variant of a value contain the needle?
fn variant_contains(raw: &str, variants: Option<&TextVariants>, needle: &str) -> bool {
    raw.to_lowercase().contains(needle)
        || variants.is_some_and(|v| {
            v.romanized.contains(needle) || v.initials.as_deref().is_some_and(|i| i.contains(needle))
        })
}

fn matches_where(hit: &RawHit, keep: impl Fn(FieldKey) -> bool) -> Vec<FieldMatch> {
    hit.matches.iter().filter(|m| keep(m.key)).cloned().collect()
}

fn collect_titles(song: &IndexedSong, hit: &RawHit, needle: &str, out: &mut Vec<Suggestion>) {
    for (index, title) in song.song.titles.iter().enumerate() {
        if variant_contains(title, song.titles.get(index), needle) {
            out.push(Suggestion::Title {
                text: title.clone(),
                song_id: song.id().to_string(),
                matches: matches_where(hit, |k| k == FieldKey::Titles),
            });
        }
    }
}

fn collect_creators(song: &IndexedSong, hit: &RawHit, needle: &str, out: &mut Vec<Suggestion>) {
    for (creator_index, creator) in song.song.creators.iter().enumerate() {
        let derived = song.creators.get(creator_index);

        if variant_contains(&creator.name, derived.map(|d| &d.name), needle) {
            out.push(Suggestion::Creator {
                text: creator.name.clone(),
                song_id: song.id().to_string(),
                creator_index,
                matches: matches_where(hit, |k| {
                    matches!(
                        k,
                        FieldKey::CreatorName
                            | FieldKey::CreatorNamePinyin
                            | FieldKey::CreatorNamePinyinInitials
                    )
                }),
            });
        }

        for (alias_index, alias) in creator.aliases.iter().enumerate() {
            let variants = derived.and_then(|d| d.aliases.get(alias_index));
            if variant_contains(alias, variants, needle) {
                out.push(Suggestion::CreatorAlias {
                    text: alias.clone(),
                    creator_name: creator.name.clone(),
                    song_id: song.id().to_string(),
                    creator_index,
                    song_title: song.song.primary_title().to_string(),
                    matches: matches_where(hit, |k| {
                        matches!(
                            k,
                            FieldKey::CreatorAliases
                                | FieldKey::CreatorAliasesPinyin
                                | FieldKey::CreatorAliasesPinyinInitials
                        )
                    }),
                });
            }
        }
    }
}

/// Deduplicate by text (first wins), sort, cap.
fn finalize(items: Vec<Suggestion>, needle: &str, cap: usize) -> Vec<Suggestion> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Suggestion> = items
        .into_iter()
        .filter(|s| seen.insert(s.text().to_string()))
        .collect();

    // Stable: equal keys keep discovery order.
    unique.sort_by_cached_key(|s| {
        let lower = s.text().to_lowercase();
        (
            !lower.starts_with(needle),
            lower != needle,
            s.text().chars().count(),
        )
    });
    unique.truncate(cap);
    unique
}
