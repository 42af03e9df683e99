//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;

use songdex::{
    Catalog, KeyValueStore, MemoryStore, SearchConfig, SearchHit, SongSearch, StoreError,
};

// Re-export canonical test utilities from songdex::testing
pub use songdex::testing::{make_creator, make_song, make_song_by, sample_catalog};

/// Catalog document shipped with the crate.
pub const SAMPLE_CATALOG: &str = "data/catalog.json";

pub fn read_sample_catalog() -> String {
    fs::read_to_string(SAMPLE_CATALOG).expect("Failed to read sample catalog")
}

/// Engine over `catalog` with default config and in-memory history.
pub fn engine_with(catalog: &Catalog) -> SongSearch {
    engine_with_config(catalog, SearchConfig::default())
}

pub fn engine_with_config(catalog: &Catalog, config: SearchConfig) -> SongSearch {
    SongSearch::new(Some(catalog), config, Box::new(MemoryStore::new()))
        .expect("default-derived config is valid")
}

pub fn sample_engine() -> SongSearch {
    engine_with(&sample_catalog())
}

pub fn catalog_of(songs: Vec<songdex::Song>) -> Catalog {
    Catalog { songs }
}

/// Song ids of a result list, in rank order.
pub fn ids(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.song_id.as_str()).collect()
}

/// A store that refuses everything, like storage disabled by the user.
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("quota exceeded".into()))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}
