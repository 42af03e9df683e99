// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searchable field paths and their default weights.
//!
//! The weight table is the ranking prior: title fields first, then extra info,
//! creators, aliases, related info, and the word index last. The ranker's
//! comparator has the final say on order, but weights decide how much each
//! field contributes to the fuzzy score it falls back on.

use serde::{Deserialize, Serialize};

use crate::types::IndexedSong;

/// A field path the matcher can search, named as in the catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "titles")]
    Titles,
    #[serde(rename = "titlesPinyin")]
    TitlesPinyin,
    #[serde(rename = "titlesPinyinInitials")]
    TitlesPinyinInitials,
    #[serde(rename = "extraInfo")]
    ExtraInfo,
    #[serde(rename = "extraInfoPinyin")]
    ExtraInfoPinyin,
    #[serde(rename = "creators.name")]
    CreatorName,
    #[serde(rename = "creators.namePinyin")]
    CreatorNamePinyin,
    #[serde(rename = "creators.namePinyinInitials")]
    CreatorNamePinyinInitials,
    #[serde(rename = "creators.aliases")]
    CreatorAliases,
    #[serde(rename = "creators.aliasesPinyin")]
    CreatorAliasesPinyin,
    #[serde(rename = "creators.aliasesPinyinInitials")]
    CreatorAliasesPinyinInitials,
    #[serde(rename = "relatedInfo")]
    RelatedInfo,
    #[serde(rename = "relatedInfoPinyin")]
    RelatedInfoPinyin,
    #[serde(rename = "wordsIndex")]
    WordsIndex,
}

impl FieldKey {
    /// Every key, highest priority first.
    pub const ALL: [FieldKey; 14] = [
        FieldKey::Titles,
        FieldKey::TitlesPinyin,
        FieldKey::TitlesPinyinInitials,
        FieldKey::ExtraInfo,
        FieldKey::ExtraInfoPinyin,
        FieldKey::CreatorName,
        FieldKey::CreatorNamePinyin,
        FieldKey::CreatorNamePinyinInitials,
        FieldKey::CreatorAliases,
        FieldKey::CreatorAliasesPinyin,
        FieldKey::CreatorAliasesPinyinInitials,
        FieldKey::RelatedInfo,
        FieldKey::RelatedInfoPinyin,
        FieldKey::WordsIndex,
    ];

    /// Keys the suggestion matcher looks at.
    pub const SUGGEST: [FieldKey; 8] = [
        FieldKey::Titles,
        FieldKey::TitlesPinyin,
        FieldKey::TitlesPinyinInitials,
        FieldKey::CreatorName,
        FieldKey::CreatorNamePinyin,
        FieldKey::CreatorNamePinyinInitials,
        FieldKey::CreatorAliases,
        FieldKey::CreatorAliasesPinyin,
    ];

    /// Dotted path as used in config files and match metadata.
    pub fn path(self) -> &'static str {
        match self {
            FieldKey::Titles => "titles",
            FieldKey::TitlesPinyin => "titlesPinyin",
            FieldKey::TitlesPinyinInitials => "titlesPinyinInitials",
            FieldKey::ExtraInfo => "extraInfo",
            FieldKey::ExtraInfoPinyin => "extraInfoPinyin",
            FieldKey::CreatorName => "creators.name",
            FieldKey::CreatorNamePinyin => "creators.namePinyin",
            FieldKey::CreatorNamePinyinInitials => "creators.namePinyinInitials",
            FieldKey::CreatorAliases => "creators.aliases",
            FieldKey::CreatorAliasesPinyin => "creators.aliasesPinyin",
            FieldKey::CreatorAliasesPinyinInitials => "creators.aliasesPinyinInitials",
            FieldKey::RelatedInfo => "relatedInfo",
            FieldKey::RelatedInfoPinyin => "relatedInfoPinyin",
            FieldKey::WordsIndex => "wordsIndex",
        }
    }

    pub fn default_weight(self) -> f64 {
        match self {
            FieldKey::Titles => 2.0,
            FieldKey::TitlesPinyin => 1.8,
            FieldKey::TitlesPinyinInitials => 1.6,
            FieldKey::ExtraInfo => 1.4,
            FieldKey::ExtraInfoPinyin => 1.2,
            FieldKey::CreatorName => 1.0,
            FieldKey::CreatorNamePinyin => 0.9,
            FieldKey::CreatorNamePinyinInitials => 0.8,
            FieldKey::CreatorAliases => 0.7,
            FieldKey::CreatorAliasesPinyin => 0.6,
            FieldKey::CreatorAliasesPinyinInitials => 0.5,
            FieldKey::RelatedInfo => 0.4,
            FieldKey::RelatedInfoPinyin => 0.3,
            FieldKey::WordsIndex => 0.2,
        }
    }

    /// Token order in the word index means nothing, so match position
    /// must not cost anything there.
    pub fn is_position_free(self) -> bool {
        self == FieldKey::WordsIndex
    }

    /// Values of this field for one song as `(index, text)`.
    ///
    /// `index` is the position of the value within the field: the title index
    /// for title fields, the creator index for names, and the flattened alias
    /// position for aliases. Missing optional values are simply absent.
    pub fn values(self, song: &IndexedSong) -> Vec<(usize, &str)> {
        let raw = &song.song;
        match self {
            FieldKey::Titles => raw.titles.iter().map(String::as_str).enumerate().collect(),
            FieldKey::TitlesPinyin => song
                .titles
                .iter()
                .map(|v| v.romanized.as_str())
                .enumerate()
                .collect(),
            FieldKey::TitlesPinyinInitials => song
                .titles
                .iter()
                .enumerate()
                .filter_map(|(i, v)| v.initials.as_deref().map(|s| (i, s)))
                .collect(),
            FieldKey::ExtraInfo => raw.extra_info.as_deref().map(|s| (0, s)).into_iter().collect(),
            FieldKey::ExtraInfoPinyin => song
                .extra_info
                .as_ref()
                .map(|v| (0, v.romanized.as_str()))
                .into_iter()
                .collect(),
            FieldKey::CreatorName => raw
                .creators
                .iter()
                .map(|c| c.name.as_str())
                .enumerate()
                .collect(),
            FieldKey::CreatorNamePinyin => song
                .creators
                .iter()
                .map(|c| c.name.romanized.as_str())
                .enumerate()
                .collect(),
            FieldKey::CreatorNamePinyinInitials => song
                .creators
                .iter()
                .enumerate()
                .filter_map(|(i, c)| c.name.initials.as_deref().map(|s| (i, s)))
                .collect(),
            FieldKey::CreatorAliases => raw
                .creators
                .iter()
                .flat_map(|c| c.aliases.iter().map(String::as_str))
                .enumerate()
                .collect(),
            FieldKey::CreatorAliasesPinyin => song
                .creators
                .iter()
                .flat_map(|c| c.aliases.iter().map(|v| v.romanized.as_str()))
                .enumerate()
                .collect(),
            FieldKey::CreatorAliasesPinyinInitials => song
                .creators
                .iter()
                .flat_map(|c| c.aliases.iter().map(|v| v.initials.as_deref()))
                .enumerate()
                .filter_map(|(i, s)| s.map(|s| (i, s)))
                .collect(),
            FieldKey::RelatedInfo => raw
                .related_info
                .iter()
                .map(String::as_str)
                .enumerate()
                .collect(),
            FieldKey::RelatedInfoPinyin => song
                .related_info
                .iter()
                .map(|v| v.romanized.as_str())
                .enumerate()
                .collect(),
            FieldKey::WordsIndex => vec![(0, song.words_index.as_str())],
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::index_song;
    use crate::romanize::PinyinRomanizer;
    use crate::testing::{make_creator, make_song};

    #[test]
    fn test_default_weights_follow_priority() {
        for pair in FieldKey::ALL.windows(2) {
            assert!(
                pair[0].default_weight() > pair[1].default_weight(),
                "{} should outweigh {}",
                pair[0],
                pair[1]
            );
        }
        assert!(FieldKey::ALL.iter().all(|k| k.default_weight() > 0.0));
    }

    #[test]
    fn test_serde_uses_paths() {
        for key in FieldKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.path()));
        }
    }

    #[test]
    fn test_alias_values_are_flattened() {
        let mut song = make_song("s", &["T"]);
        song.creators = vec![
            make_creator("A", &["a1", "a2"]),
            make_creator("B", &["帕赫贝尔"]),
        ];
        let indexed = index_song(&song, &PinyinRomanizer);

        let aliases = FieldKey::CreatorAliases.values(&indexed);
        assert_eq!(aliases, vec![(0, "a1"), (1, "a2"), (2, "帕赫贝尔")]);

        // Only the CJK alias has initials, but it keeps its flattened position.
        let initials = FieldKey::CreatorAliasesPinyinInitials.values(&indexed);
        assert_eq!(initials.len(), 1);
        assert_eq!(initials[0].0, 2);
    }
}
