//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Catalog, Creator, Song};

/// Create a song with the given titles and nothing else.
///
/// This is the canonical implementation used across all tests.
pub fn make_song(id: &str, titles: &[&str]) -> Song {
    Song {
        id: id.to_string(),
        titles: titles.iter().map(|t| (*t).to_string()).collect(),
        creators: vec![],
        related_info: vec![],
        extra_info: None,
        path: None,
        audio_path: None,
    }
}

/// Create a creator with aliases.
pub fn make_creator(name: &str, aliases: &[&str]) -> Creator {
    Creator {
        name: name.to_string(),
        aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// Create a song credited to a single creator.
pub fn make_song_by(id: &str, titles: &[&str], creator: &str) -> Song {
    Song {
        creators: vec![make_creator(creator, &[])],
        ..make_song(id, titles)
    }
}

/// A small mixed Chinese/Latin catalog resembling real data.
pub fn sample_catalog() -> Catalog {
    let canon = Song {
        creators: vec![
            make_creator("Johann Pachelbel", &["Pachelbel", "帕赫贝尔", "巴赫贝尔"]),
            make_creator("中国爱乐乐团", &["China Philharmonic Orchestra"]),
            make_creator("瑞鸣音乐", &[]),
        ],
        related_info: vec!["古典音乐".to_string()],
        path: Some("/music/canon_in_d/".to_string()),
        ..make_song("canon_in_d", &["Canon in D", "D大调卡农", "卡农"])
    };

    let moon_halo = Song {
        extra_info: Some("崩坏3动画短片《薪炎永燃》主题曲".to_string()),
        creators: vec![
            make_creator("茶理理", &["Chalili", "茶理理理子"]),
            make_creator("hanser", &[]),
            make_creator("TetraCalyx", &[]),
            make_creator("HOYO-MiX", &[]),
        ],
        related_info: vec![
            "崩坏3".to_string(),
            "薪炎永燃".to_string(),
            "动画短片配乐".to_string(),
            "Honkai Impact 3rd".to_string(),
        ],
        path: Some("/music/moon_halo/".to_string()),
        ..make_song("moon_halo", &["Moon Halo", "月晕"])
    };

    let da_capo = Song {
        extra_info: Some("崩坏3动画短片《毕业旅行》主题曲".to_string()),
        creators: vec![
            make_creator("车子玉Ziyu Che(HOYO-MiX)", &[]),
            make_creator("HOYO-MiX", &[]),
        ],
        related_info: vec![
            "崩坏3".to_string(),
            "毕业旅行".to_string(),
            "动画短片配乐".to_string(),
            "Honkai Impact 3rd".to_string(),
        ],
        path: Some("/music/da_capo/".to_string()),
        ..make_song("da_capo", &["Da Capo", "返始"])
    };

    let da_capo_instrumental = Song {
        extra_info: Some("崩坏3动画短片《毕业旅行》主题曲伴奏".to_string()),
        creators: vec![make_creator("HOYO-MiX", &[])],
        related_info: vec![
            "崩坏3".to_string(),
            "毕业旅行".to_string(),
            "动画短片配乐".to_string(),
            "Honkai Impact 3rd".to_string(),
            "Instrumental".to_string(),
            "伴奏".to_string(),
        ],
        path: Some("/music/da_capo_instrumental/".to_string()),
        ..make_song(
            "da_capo_instrumental",
            &["Da Capo (Instrumental)", "Da Capo (伴奏)", "返始 (伴奏)"],
        )
    };

    Catalog {
        songs: vec![canon, moon_halo, da_capo, da_capo_instrumental],
    }
}
