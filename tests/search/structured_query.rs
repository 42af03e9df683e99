//! `field:value` queries: scoping, match modes, and fallbacks.

use super::common::{catalog_of, engine_with, ids, make_song, make_song_by, sample_engine};

#[test]
fn test_creator_scope_excludes_other_fields() {
    let mut related = make_song("related", &["Organ Works"]);
    related.related_info = vec!["Pachelbel".to_string()];
    let mut engine = engine_with(&catalog_of(vec![
        related,
        make_song_by("by", &["Canon"], "Johann Pachelbel"),
    ]));

    let hits = engine.search("creator:Pachelbel");
    assert_eq!(ids(&hits), vec!["by"]);
}

#[test]
fn test_alias_scope_uses_containment() {
    let mut engine = sample_engine();
    let hits = engine.search("alias:chalili");
    assert_eq!(ids(&hits), vec!["moon_halo"]);

    // 帕赫贝尔 is an alias, not a name.
    assert!(engine.search("creator:帕赫贝尔").is_empty());
    assert_eq!(ids(&engine.search("alias:帕赫贝尔")), vec!["canon_in_d"]);
}

#[test]
fn test_info_scope_returns_every_tagged_song() {
    let mut engine = sample_engine();
    let hits = engine.search("info:崩坏3");
    assert_eq!(ids(&hits), vec!["moon_halo", "da_capo", "da_capo_instrumental"]);
    assert!(hits.iter().all(|h| h.score < 1e-6));
}

#[test]
fn test_title_scope_is_prefix_only() {
    let mut engine = sample_engine();
    let hits = engine.search("title:da");
    // Both start at offset 0; more matching titles give the lower score.
    assert_eq!(ids(&hits), vec!["da_capo_instrumental", "da_capo"]);
    assert!(hits[0].score < hits[1].score);
    // "Canon in D" contains "in d" but does not start with it.
    assert!(engine.search("title:in d").is_empty());
}

#[test]
fn test_title_scope_matches_romanized_titles() {
    let mut engine = sample_engine();
    assert_eq!(ids(&engine.search("title:kanong")), vec!["canon_in_d"]);
    assert_eq!(ids(&engine.search("title:yue")), vec!["moon_halo"]);
}

#[test]
fn test_field_name_is_case_insensitive() {
    let mut engine = sample_engine();
    assert_eq!(ids(&engine.search("ALIAS: Chalili")), vec!["moon_halo"]);
}

#[test]
fn test_unknown_field_is_a_plain_query() {
    let mut engine = sample_engine();
    let _ = engine.search("year:1999");
    assert_eq!(engine.history(), ["year:1999"]);
}

#[test]
fn test_known_field_without_value_is_not_searched() {
    let mut engine = sample_engine();
    assert!(engine.search("title:").is_empty());
    assert!(engine.search("info:   ").is_empty());
    assert!(engine.history().is_empty());
}
