// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog document loading.
//!
//! Two flavours. The strict ones ([`Catalog::from_json`], [`Catalog::from_path`])
//! report what went wrong. The lenient ones never fail: bad JSON or a missing
//! `songs` array gives an empty catalog, and individual malformed songs are
//! dropped so one typo does not take the whole catalog down with it.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::CatalogError;
use crate::types::{Catalog, Song};

impl Catalog {
    /// Parse a catalog document, rejecting anything malformed.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let doc: Value = serde_json::from_str(raw)?;
        if !doc.get("songs").is_some_and(Value::is_array) {
            return Err(CatalogError::MissingSongs);
        }
        Ok(serde_json::from_value(doc)?)
    }

    /// Read and parse a catalog file, rejecting anything malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Parse a catalog document, degrading to an empty catalog on any problem.
pub fn parse_catalog_lenient(raw: &str) -> Catalog {
    match serde_json::from_str::<Value>(raw) {
        Ok(doc) => catalog_from_value(&doc),
        Err(e) => {
            warn!(error = %e, "catalog is not valid JSON; using an empty catalog");
            Catalog::default()
        }
    }
}

/// Extract songs from an already-parsed document, skipping malformed entries.
pub fn catalog_from_value(doc: &Value) -> Catalog {
    let Some(entries) = doc.get("songs").and_then(Value::as_array) else {
        warn!("catalog has no `songs` array; using an empty catalog");
        return Catalog::default();
    };

    let songs = entries
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match Song::deserialize(entry) {
            Ok(song) => Some(song),
            Err(e) => {
                warn!(position, error = %e, "skipping malformed song entry");
                None
            }
        })
        .collect();

    Catalog { songs }
}
