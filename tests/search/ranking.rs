//! Ranking tests: the comparator overrides the fuzzy score.
//!
//! Each test puts the song that should lose first in the catalog, so a pass
//! cannot come from catalog order alone.

use super::common::{catalog_of, engine_with, ids, make_creator, make_song, sample_engine};

#[test]
fn test_exact_title_beats_substring_title() {
    let mut engine = engine_with(&catalog_of(vec![
        make_song("remix", &["Canon in D Remix"]),
        make_song("original", &["Canon in D"]),
    ]));

    let hits = engine.search("Canon in D");
    assert_eq!(ids(&hits), vec!["original", "remix"]);
}

#[test]
fn test_exact_title_matches_any_title_case_insensitively() {
    let mut engine = sample_engine();
    let hits = engine.search("d大调卡农");
    assert_eq!(hits[0].song_id, "canon_in_d");
}

#[test]
fn test_earlier_title_offset_ranks_first() {
    let mut engine = engine_with(&catalog_of(vec![
        make_song("late", &["Moon Halo"]),
        make_song("early", &["A Halo"]),
    ]));

    let hits = engine.search("halo");
    assert_eq!(ids(&hits), vec!["early", "late"]);
}

#[test]
fn test_title_span_beats_no_title_span() {
    let mut related = make_song("related", &["Sonata"]);
    related.related_info = vec!["halo".to_string()];
    let mut engine = engine_with(&catalog_of(vec![related, make_song("titled", &["The Halo"])]));

    let hits = engine.search("halo");
    assert_eq!(ids(&hits), vec!["titled", "related"]);
}

#[test]
fn test_title_prefix_breaks_offset_tie() {
    let mut engine = engine_with(&catalog_of(vec![
        make_song("fuzzy", &["Mood Swing"]),
        make_song("prefix", &["Moonlight"]),
    ]));

    let hits = engine.search("moon");
    assert_eq!(ids(&hits), vec!["prefix", "fuzzy"]);
}

#[test]
fn test_extra_info_containment_ranks_next() {
    let mut related = make_song("related", &["Alpha"]);
    related.related_info = vec!["Theme Song".to_string()];
    let mut extra = make_song("extra", &["Beta"]);
    extra.extra_info = Some("The theme song of Beta".to_string());
    let mut engine = engine_with(&catalog_of(vec![related, extra]));

    let hits = engine.search("theme song");
    assert_eq!(ids(&hits), vec!["extra", "related"]);
}

#[test]
fn test_creator_name_beats_alias() {
    let mut by_alias = make_song("by_alias", &["Song A"]);
    by_alias.creators = vec![make_creator("Someone", &["hanser"])];
    let mut by_name = make_song("by_name", &["Song B"]);
    by_name.creators = vec![make_creator("hanser", &[])];
    let mut engine = engine_with(&catalog_of(vec![by_alias, by_name]));

    let hits = engine.search("hanser");
    assert_eq!(ids(&hits), vec!["by_name", "by_alias"]);
}

#[test]
fn test_romanized_query_finds_cjk_title() {
    let mut engine = sample_engine();
    assert_eq!(engine.search("yueyun")[0].song_id, "moon_halo");
    assert_eq!(engine.search("kanong")[0].song_id, "canon_in_d");
}

#[test]
fn test_title_spans_are_reported() {
    let mut engine = sample_engine();
    let hits = engine.search("卡农");
    let top = &hits[0];
    assert_eq!(top.song_id, "canon_in_d");

    let title_match = top
        .matches
        .iter()
        .find(|m| m.key == songdex::FieldKey::Titles && m.value == "D大调卡农")
        .expect("title match on D大调卡农");
    assert_eq!(title_match.spans, vec![3..5]);
}
