// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.
//!
//! Each hit is projected once into a [`RankKey`] and the keys are compared,
//! so sorting never rescans song text. Criteria, first discriminator wins:
//!
//! 1. Query equals a title
//! 2. Earliest match offset on `titles` (hits without one go after)
//! 3. A title starts with the query
//! 4. `extraInfo` contains the query
//! 5. Query equals a creator name
//! 6. Query equals a creator alias
//! 7. Fuzzy score, ascending
//!
//! All text comparisons are case-insensitive against the trimmed query. The
//! sort is stable, so hits that tie on everything keep catalog order.

use std::cmp::Ordering;

use serde::Serialize;

use crate::fuzzy::{FieldKey, FieldMatch, RawHit};
use crate::types::{IndexedCatalog, IndexedSong};

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub song_id: String,
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

/// Everything the comparator looks at, computed once per hit.
#[derive(Debug, Clone, PartialEq)]
pub struct RankKey {
    pub exact_title: bool,
    pub min_title_offset: Option<usize>,
    pub title_prefix: bool,
    pub extra_info_contains: bool,
    pub creator_exact: bool,
    pub alias_exact: bool,
    pub score: f64,
}

impl RankKey {
    /// Project a hit. `query` must already be trimmed and lowercased.
    pub fn project(hit: &RawHit, song: &IndexedSong, query: &str) -> Self {
        let raw = &song.song;
        let titles: Vec<String> = raw.titles.iter().map(|t| t.to_lowercase()).collect();

        Self {
            exact_title: titles.iter().any(|t| t == query),
            min_title_offset: hit
                .matches_on(FieldKey::Titles)
                .flat_map(|m| m.spans.iter().map(|s| s.start))
                .min(),
            title_prefix: titles.iter().any(|t| t.starts_with(query)),
            extra_info_contains: raw
                .extra_info
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains(query)),
            creator_exact: raw.creators.iter().any(|c| c.name.to_lowercase() == query),
            alias_exact: raw
                .creators
                .iter()
                .flat_map(|c| c.aliases.iter())
                .any(|a| a.to_lowercase() == query),
            score: hit.score,
        }
    }
}

/// Compare two projected hits. `Less` ranks first.
pub fn compare_keys(a: &RankKey, b: &RankKey) -> Ordering {
    // `true` sorts first for every flag, hence the reversed operands.
    b.exact_title
        .cmp(&a.exact_title)
        .then_with(|| match (a.min_title_offset, b.min_title_offset) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| b.title_prefix.cmp(&a.title_prefix))
        .then_with(|| b.extra_info_contains.cmp(&a.extra_info_contains))
        .then_with(|| b.creator_exact.cmp(&a.creator_exact))
        .then_with(|| b.alias_exact.cmp(&a.alias_exact))
        .then_with(|| a.score.total_cmp(&b.score))
}

/// Order raw hits for `query` and resolve them to song ids.
///
/// Hits pointing outside `catalog` are dropped.
pub fn rank(hits: Vec<RawHit>, catalog: &IndexedCatalog, query: &str) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();

    let mut keyed: Vec<(RankKey, RawHit, &IndexedSong)> = hits
        .into_iter()
        .filter_map(|hit| {
            let song = catalog.songs.get(hit.position)?;
            Some((RankKey::project(&hit, song, &query), hit, song))
        })
        .collect();

    keyed.sort_by(|a, b| compare_keys(&a.0, &b.0));

    keyed
        .into_iter()
        .map(|(_, hit, song)| SearchHit {
            song_id: song.id().to_string(),
            score: hit.score,
            matches: hit.matches,
        })
        .collect()
}
