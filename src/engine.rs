// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine facade.
//!
//! [`SongSearch`] wires the pieces together:
//!
//! ```text
//! query  → preprocess → FuzzyMatcher → rank → Vec<SearchHit>
//!                                   ↘ history.append
//! prefix → Suggester (index + history) → SuggestionSet
//! ```
//!
//! The index sits behind an `Arc` and is replaced wholesale by
//! [`SongSearch::reload`]. The new index is built completely before the swap,
//! and anyone holding a snapshot from [`SongSearch::index`] keeps a valid,
//! unchanged catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::fuzzy::FuzzyMatcher;
use crate::history::{KeyValueStore, SearchHistory};
use crate::index::{build_index, parse_catalog_lenient};
use crate::query::preprocess;
use crate::scoring::{rank, SearchHit};
use crate::suggest::{Suggester, SuggestionSet};
use crate::types::{Catalog, Creator, IndexedCatalog, Song};

/// A creator as presented to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorInfo {
    pub name: String,
    pub aliases: Vec<String>,
    pub display_name: String,
}

impl From<&Creator> for CreatorInfo {
    fn from(creator: &Creator) -> Self {
        Self {
            name: creator.name.clone(),
            aliases: creator.aliases.clone(),
            display_name: creator.name.clone(),
        }
    }
}

/// Everything about one song, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongInfo {
    pub id: String,
    pub titles: Vec<String>,
    pub primary_title: String,
    pub creators: Vec<CreatorInfo>,
    pub path: Option<String>,
    pub audio_path: Option<String>,
    pub related_info: Vec<String>,
    pub extra_info: Option<String>,
}

impl From<&Song> for SongInfo {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            titles: song.titles.clone(),
            primary_title: song.primary_title().to_string(),
            creators: song.creators.iter().map(CreatorInfo::from).collect(),
            path: song.path.clone(),
            audio_path: song.audio_path.clone(),
            related_info: song.related_info.clone(),
            extra_info: song.extra_info.clone(),
        }
    }
}

/// In-memory song search with suggestions and history.
pub struct SongSearch {
    config: SearchConfig,
    index: Arc<IndexedCatalog>,
    matcher: FuzzyMatcher,
    suggester: Suggester,
    history: SearchHistory,
}

impl std::fmt::Debug for SongSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SongSearch")
            .field("songs", &self.index.len())
            .field("config", &self.config)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl SongSearch {
    /// Build an engine over `catalog` (`None` = no catalog, empty index).
    ///
    /// Only an invalid `config` is an error. History is loaded from `store`.
    pub fn new(
        catalog: Option<&Catalog>,
        config: SearchConfig,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let matcher = FuzzyMatcher::new(config.matcher.weighted_keys(), config.matcher.settings());
        let suggester = Suggester::new(
            config
                .suggest_matcher
                .settings(config.matcher.ignore_diacritics),
        );
        let history = SearchHistory::load(store, config.history_key.clone(), config.history_limit);

        Ok(Self {
            index: Arc::new(build_index(catalog)),
            config,
            matcher,
            suggester,
            history,
        })
    }

    /// Like [`SongSearch::new`], from a JSON catalog document parsed leniently.
    pub fn from_json(
        raw: &str,
        config: SearchConfig,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, ConfigError> {
        let catalog = parse_catalog_lenient(raw);
        Self::new(Some(&catalog), config, store)
    }

    /// Ranked hits for `query`. Blank queries return nothing and are not recorded.
    pub fn search(&mut self, query: &str) -> Vec<SearchHit> {
        let Some(parsed) = preprocess(query) else {
            return Vec::new();
        };

        if !self.config.disable_history {
            self.history.append(query.trim());
        }

        let hits = match parsed.scope.keys() {
            None => self.matcher.search(&self.index, &parsed.text),
            Some(keys) => {
                self.matcher
                    .search_keys(&self.index, &parsed.text, keys, parsed.scope.mode())
            }
        };
        let ranked = rank(hits, &self.index, query);
        debug!(query = %parsed, hits = ranked.len(), "search");
        ranked
    }

    /// Suggestions for `prefix`. A missing or zero `limit` uses `maxSuggestions`.
    pub fn suggest(&self, prefix: &str, limit: Option<usize>) -> SuggestionSet {
        let limit = limit
            .filter(|&l| l > 0)
            .unwrap_or(self.config.max_suggestions);
        let history = (!self.config.disable_history).then(|| self.history.entries());
        self.suggester.suggest(&self.index, history, prefix, limit)
    }

    /// Past queries, newest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Replace the catalog. The old index stays valid for existing snapshots.
    pub fn reload(&mut self, catalog: Option<&Catalog>) {
        let fresh = Arc::new(build_index(catalog));
        info!(
            previous = self.index.len(),
            songs = fresh.len(),
            "reloaded catalog"
        );
        self.index = fresh;
    }

    /// [`SongSearch::reload`] from a JSON catalog document parsed leniently.
    pub fn reload_json(&mut self, raw: &str) {
        let catalog = parse_catalog_lenient(raw);
        self.reload(Some(&catalog));
    }

    /// Snapshot of the current index.
    pub fn index(&self) -> Arc<IndexedCatalog> {
        Arc::clone(&self.index)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn history_store(&self) -> &dyn KeyValueStore {
        self.history.store()
    }

    pub fn song(&self, id: &str) -> Option<&Song> {
        self.index.get(id).map(|s| &s.song)
    }

    pub fn song_info(&self, id: &str) -> Option<SongInfo> {
        self.song(id).map(SongInfo::from)
    }

    pub fn titles(&self, id: &str) -> Option<&[String]> {
        self.song(id).map(|s| s.titles.as_slice())
    }

    pub fn creators(&self, id: &str) -> Option<Vec<CreatorInfo>> {
        self.song(id)
            .map(|s| s.creators.iter().map(CreatorInfo::from).collect())
    }

    pub fn related_info(&self, id: &str) -> Option<&[String]> {
        self.song(id).map(|s| s.related_info.as_slice())
    }

    pub fn extra_info(&self, id: &str) -> Option<&str> {
        self.song(id).and_then(|s| s.extra_info.as_deref())
    }

    pub fn path(&self, id: &str) -> Option<&str> {
        self.song(id).and_then(|s| s.path.as_deref())
    }

    pub fn audio_path(&self, id: &str) -> Option<&str> {
        self.song(id).and_then(|s| s.audio_path.as_deref())
    }
}
