//! Same input, same output.

use songdex::build_index;

use super::common::{catalog_of, engine_with, ids, make_song, sample_catalog, sample_engine};

#[test]
fn test_index_build_is_deterministic() {
    let catalog = sample_catalog();
    let a = build_index(Some(&catalog));
    let b = build_index(Some(&catalog));
    assert_eq!(a, b);
}

#[test]
fn test_repeated_search_is_identical() {
    let mut engine = sample_engine();
    for query in ["canon", "hoyo-mix", "崩坏", "dcp", "title:da", "alias:pachelbel"] {
        let first = engine.search(query);
        let second = engine.search(query);
        assert_eq!(first, second, "{query}");
    }
}

#[test]
fn test_full_ties_keep_catalog_order() {
    let mut engine = engine_with(&catalog_of(vec![
        make_song("first", &["Lullaby"]),
        make_song("second", &["Lullaby"]),
        make_song("third", &["Lullaby"]),
    ]));
    assert_eq!(ids(&engine.search("lullaby")), vec!["first", "second", "third"]);
}

#[test]
fn test_suggestions_are_stable() {
    let engine = sample_engine();
    assert_eq!(engine.suggest("da", None), engine.suggest("da", None));
}
