//! End-to-end tests over the bundled catalog document.

mod common;

use common::{ids, read_sample_catalog};
use songdex::{
    build_index_from_json, Catalog, MemoryStore, SearchConfig, SongSearch, Suggestion,
};

fn engine() -> SongSearch {
    SongSearch::from_json(
        &read_sample_catalog(),
        SearchConfig::default(),
        Box::new(MemoryStore::new()),
    )
    .expect("default config is valid")
}

#[test]
fn test_catalog_document_parses_strictly() {
    let catalog = Catalog::from_json(&read_sample_catalog()).expect("bundled catalog is valid");
    assert_eq!(catalog.songs.len(), 4);
    assert_eq!(build_index_from_json(&read_sample_catalog()).len(), 4);
}

#[test]
fn test_search_scenarios() {
    let mut engine = engine();
    let cases = [
        ("canon in d", "canon_in_d"),
        ("卡农", "canon_in_d"),
        ("kanong", "canon_in_d"),
        ("yueyun", "moon_halo"),
        ("moon halo", "moon_halo"),
        ("返始", "da_capo"),
        ("Da Capo (Instrumental)", "da_capo_instrumental"),
    ];
    for (query, expected) in cases {
        let hits = engine.search(query);
        assert_eq!(
            hits.first().map(|h| h.song_id.as_str()),
            Some(expected),
            "{query}: {:?}",
            ids(&hits)
        );
    }
}

#[test]
fn test_shared_creator_returns_all_their_songs() {
    let mut engine = engine();
    let hits = engine.search("hoyo-mix");
    let mut top: Vec<&str> = ids(&hits).into_iter().take(3).collect();
    top.sort_unstable();
    assert_eq!(top, vec!["da_capo", "da_capo_instrumental", "moon_halo"]);
}

#[test]
fn test_song_info_carries_paths() {
    let engine = engine();
    let info = engine.song_info("canon_in_d").expect("song exists");
    assert_eq!(info.primary_title, "Canon in D");
    assert_eq!(info.titles.len(), 3);
    assert_eq!(info.creators.len(), 3);
    assert_eq!(info.creators[0].aliases, ["Pachelbel", "帕赫贝尔", "巴赫贝尔"]);
    assert_eq!(info.path.as_deref(), Some("/music/canon_in_d/"));
    assert!(engine
        .audio_path("moon_halo")
        .is_some_and(|p| p.ends_with("id=1859652717.mp3")));

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["primaryTitle"], "Canon in D");
    assert!(json["audioPath"].is_string());
}

#[test]
fn test_suggest_titles() {
    let engine = engine();
    let set = engine.suggest("da", None);
    let titles: Vec<&str> = set.titles.iter().map(Suggestion::text).collect();
    assert_eq!(titles, vec!["Da Capo", "Da Capo (伴奏)", "Da Capo (Instrumental)"]);
}

#[test]
fn test_reload_swaps_catalog() {
    let mut engine = engine();
    let snapshot = engine.index();

    engine.reload_json(r#"{ "songs": [ { "id": "new", "titles": ["Brand New"] } ] }"#);
    assert_eq!(ids(&engine.search("brand new")), vec!["new"]);
    assert!(engine.search("canon in d").is_empty());
    assert_eq!(snapshot.len(), 4);
    assert!(snapshot.get("canon_in_d").is_some());

    // History outlives the reload.
    assert_eq!(engine.history(), ["canon in d", "brand new"]);
}

#[test]
fn test_hits_serialize_for_callers() {
    let mut engine = engine();
    let hits = engine.search("月晕");
    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(json[0]["songId"], "moon_halo");
    assert_eq!(json[0]["matches"][0]["key"], "titles");
    assert!(json[0]["matches"][0]["spans"].is_array());
}
