// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search history: most-recent-first, unique, capped.
//!
//! The in-memory list is the source of truth. Every change is written through
//! to a [`KeyValueStore`] as a JSON array under one key, but a failed write is
//! only logged: history must never get in the way of searching.

mod store;

pub use store::*;

use std::collections::HashSet;

use tracing::{debug, warn};

/// Queries shorter than this many characters are not worth remembering.
pub const MIN_QUERY_CHARS: usize = 2;

/// Past queries, newest first.
pub struct SearchHistory {
    entries: Vec<String>,
    limit: usize,
    key: String,
    store: Box<dyn KeyValueStore>,
}

impl std::fmt::Debug for SearchHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchHistory")
            .field("entries", &self.entries)
            .field("limit", &self.limit)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl SearchHistory {
    /// Load whatever `store` holds under `key`, keeping at most `limit` entries.
    ///
    /// Missing, unreadable or malformed data all start an empty history.
    /// Stored duplicates keep their first occurrence and entries too short to
    /// record are dropped, so a loaded list holds what `append` would allow.
    pub fn load(store: Box<dyn KeyValueStore>, key: impl Into<String>, limit: usize) -> Self {
        let key = key.into();
        let mut entries = match store.get_item(&key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "stored search history is malformed; starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to load search history");
                Vec::new()
            }
        };
        let mut seen = HashSet::new();
        entries.retain(|e| e.chars().count() >= MIN_QUERY_CHARS && seen.insert(e.clone()));
        entries.truncate(limit);
        debug!(entries = entries.len(), "loaded search history");

        Self {
            entries,
            limit,
            key,
            store,
        }
    }

    /// Record a query at the front, moving it there if already present.
    ///
    /// Returns false when the query was too short to record.
    pub fn append(&mut self, query: &str) -> bool {
        if query.chars().count() < MIN_QUERY_CHARS {
            return false;
        }

        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        self.persist();
        true
    }

    /// Newest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything. The in-memory list is cleared even if the store
    /// refuses the removal.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove_item(&self.key) {
            warn!(key = %self.key, error = %e, "failed to remove stored search history");
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(Into::into)
            .and_then(|raw| self.store.set_item(&self.key, &raw));
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "failed to save search history");
        }
    }
}
