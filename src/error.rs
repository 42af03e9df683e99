// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Very little in this crate is allowed to fail loudly. Search, suggestions and
//! history never hand an error back to the caller: store failures are logged
//! and swallowed, a broken catalog becomes an empty index. What remains here is
//! what the lenient paths catch, plus configuration validation, which is the
//! one place a caller can be told "no".

use thiserror::Error;

/// Invalid [`SearchConfig`](crate::SearchConfig) values, reported at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// History capacity must hold at least one query
    #[error("historyLimit must be at least 1, got {0}")]
    InvalidHistoryLimit(usize),
    /// Suggestion limit must allow at least one suggestion
    #[error("maxSuggestions must be at least 1, got {0}")]
    InvalidMaxSuggestions(usize),
    /// Matcher threshold outside `[0, 1]`
    #[error("threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    /// Field weight that is zero, negative or not finite
    #[error("weight for field `{field}` must be positive and finite, got {weight}")]
    InvalidWeight { field: String, weight: f64 },
    /// Override that puts a field at or above a higher-priority one
    #[error("weight for `{lower}` ({lower_weight}) must be below higher-priority `{higher}` ({higher_weight})")]
    WeightOrder {
        higher: String,
        lower: String,
        higher_weight: f64,
        lower_weight: f64,
    },
    /// Config document could not be parsed
    #[error("invalid config: {0}")]
    Parse(String),
}

/// Failures of the persistent key/value backend behind search history.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend refused the operation (quota, disabled storage, ...)
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Reading or writing the backing file failed
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Stored value was not the JSON we expected
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog document problems. The lenient builders turn these into an empty index.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no `songs` array")]
    MissingSongs,
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}
