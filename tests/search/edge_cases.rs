//! Inputs that must degrade quietly instead of failing.

use songdex::{MemoryStore, SearchConfig, SongSearch};

use super::common::{catalog_of, engine_with, ids, make_song, sample_engine};

fn engine_from_json(raw: &str) -> SongSearch {
    SongSearch::from_json(raw, SearchConfig::default(), Box::new(MemoryStore::new()))
        .expect("default config is valid")
}

#[test]
fn test_missing_catalog_answers_nothing() {
    let mut engine =
        SongSearch::new(None, SearchConfig::default(), Box::new(MemoryStore::new())).unwrap();
    assert!(engine.index().is_empty());
    assert!(engine.search("canon").is_empty());
    assert!(engine.suggest("canon", None).titles.is_empty());
    assert!(engine.song_info("canon_in_d").is_none());
}

#[test]
fn test_garbage_json_gives_empty_index() {
    for raw in ["", "not json", "[]", r#"{"songs": 3}"#, "null"] {
        let mut engine = engine_from_json(raw);
        assert!(engine.index().is_empty(), "{raw:?}");
        assert!(engine.search("moon").is_empty(), "{raw:?}");
    }
}

#[test]
fn test_malformed_songs_are_skipped() {
    let raw = r#"{ "songs": [
        { "id": "bad_titles", "titles": "Moon Halo" },
        { "id": "no_titles", "titles": [] },
        { "titles": ["No Id"] },
        { "id": "ok", "titles": ["Moon Halo"], "creators": [{ "name": "hanser" }] }
    ] }"#;
    let mut engine = engine_from_json(raw);
    assert_eq!(engine.index().len(), 1);
    assert_eq!(ids(&engine.search("moon halo")), vec!["ok"]);
}

#[test]
fn test_blank_query_returns_nothing() {
    let mut engine = sample_engine();
    assert!(engine.search("").is_empty());
    assert!(engine.search(" \t\n ").is_empty());
    assert!(engine.history().is_empty());
}

#[test]
fn test_markup_in_prefix_is_escaped() {
    let engine = sample_engine();
    let set = engine.suggest("<script>", None);
    assert_eq!(set.query, "&lt;script&gt;");
    assert!(set.titles.is_empty());
}

#[test]
fn test_markup_in_query_does_not_break_search() {
    let mut engine = engine_with(&catalog_of(vec![make_song("tag", &["<b>Bold</b>"])]));
    assert_eq!(ids(&engine.search("<b>bold")), vec!["tag"]);
}

#[test]
fn test_long_query_is_handled() {
    let mut engine = sample_engine();
    let query = "卡农 moon halo ".repeat(40);
    let _ = engine.search(&query);
    let _ = engine.suggest(&query, Some(10));
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_unicode_edge_inputs() {
    let mut engine = sample_engine();
    for q in ["🎵", "\u{200b}", "İstanbul", "ｍｏｏｎ", "ä"] {
        let _ = engine.search(q);
        let _ = engine.suggest(q, None);
    }
}
