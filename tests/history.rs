//! History tests through the engine: capacity, ordering, persistence, failure.

mod common;

use common::{sample_catalog, FailingStore};
use songdex::{FileStore, KeyValueStore, MemoryStore, SearchConfig, SearchHistory, SongSearch};
use tempfile::TempDir;

fn engine_on(store: Box<dyn KeyValueStore>, config: SearchConfig) -> SongSearch {
    SongSearch::new(Some(&sample_catalog()), config, store).expect("valid config")
}

fn limited(limit: usize) -> SearchConfig {
    SearchConfig {
        history_limit: limit,
        ..SearchConfig::default()
    }
}

#[test]
fn test_capacity_and_move_to_front() {
    let mut engine = engine_on(Box::new(MemoryStore::new()), limited(3));
    for q in ["aa", "bb", "cc", "dd"] {
        engine.search(q);
    }
    assert_eq!(engine.history(), ["dd", "cc", "bb"]);

    engine.search("bb");
    assert_eq!(engine.history(), ["bb", "dd", "cc"]);
}

#[test]
fn test_short_and_padded_queries() {
    let mut engine = engine_on(Box::new(MemoryStore::new()), SearchConfig::default());
    engine.search("a");
    engine.search("  moon  ");
    assert_eq!(engine.history(), ["moon"]);
}

#[test]
fn test_failing_store_is_not_fatal() {
    let mut engine = engine_on(Box::new(FailingStore), SearchConfig::default());
    assert_eq!(engine.search("moon halo")[0].song_id, "moon_halo");
    assert_eq!(engine.history(), ["moon halo"]);

    engine.clear_history();
    assert!(engine.history().is_empty());
}

#[test]
fn test_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut engine = engine_on(Box::new(FileStore::new(&path)), SearchConfig::default());
        engine.search("canon");
        engine.search("moon halo");
    }

    let mut engine = engine_on(Box::new(FileStore::new(&path)), SearchConfig::default());
    assert_eq!(engine.history(), ["moon halo", "canon"]);

    engine.clear_history();
    let engine = engine_on(Box::new(FileStore::new(&path)), SearchConfig::default());
    assert!(engine.history().is_empty());
}

#[test]
fn test_smaller_limit_truncates_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut engine = engine_on(Box::new(FileStore::new(&path)), SearchConfig::default());
        for q in ["one", "two", "three", "four", "five"] {
            engine.search(q);
        }
    }

    let engine = engine_on(Box::new(FileStore::new(&path)), limited(2));
    assert_eq!(engine.history(), ["five", "four"]);
}

#[test]
fn test_history_keys_are_independent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let keyed = |key: &str| SearchConfig {
        history_key: key.to_string(),
        ..SearchConfig::default()
    };

    {
        let mut engine = engine_on(Box::new(FileStore::new(&path)), keyed("desktop"));
        engine.search("canon");
    }
    {
        let mut engine = engine_on(Box::new(FileStore::new(&path)), keyed("mobile"));
        assert!(engine.history().is_empty());
        engine.search("moon");
    }

    let desktop = SearchHistory::load(Box::new(FileStore::new(&path)), "desktop", 10);
    let mobile = SearchHistory::load(Box::new(FileStore::new(&path)), "mobile", 10);
    assert_eq!(desktop.entries(), ["canon"]);
    assert_eq!(mobile.entries(), ["moon"]);
}

#[test]
fn test_stored_format_is_a_json_array() {
    let mut engine = engine_on(Box::new(MemoryStore::new()), SearchConfig::default());
    engine.search("moon");
    engine.search("canon");

    let raw = engine
        .history_store()
        .get_item(songdex::DEFAULT_HISTORY_KEY)
        .unwrap()
        .unwrap();
    assert_eq!(raw, r#"["canon","moon"]"#);
}
