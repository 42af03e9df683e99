//! In-memory fuzzy song search with pinyin matching.
//!
//! This crate indexes a small, static catalog of songs with mixed Chinese and
//! Latin text and answers three kinds of requests: ranked search, categorized
//! autocomplete suggestions, and search history.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  romanize   │────▶│    index     │────▶│    fuzzy     │
//! │ (Romanizer, │     │ (build_index,│     │(FuzzyMatcher,│
//! │  pinyin)    │     │  word index) │     │  FieldKey)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌──────────────┬─────────────────────────┤
//!        ▼              ▼                         ▼
//! ┌─────────────┐ ┌─────────────┐          ┌─────────────┐
//! │    query    │ │   scoring   │          │   suggest   │◀──┐
//! │ (preprocess)│ │   (rank)    │          │ (Suggester) │   │
//! └─────────────┘ └─────────────┘          └─────────────┘   │
//!        │              │                         │          │
//!        ▼              ▼                         ▼          │
//! ┌─────────────────────────────────────────────────────┐    │
//! │                  engine::SongSearch                  │    │
//! │   search / suggest / history / reload / song_info    │    │
//! └─────────────────────────────────────────────────────┘    │
//!                           │                                 │
//!                           ▼                                 │
//!                  ┌─────────────────┐                        │
//!                  │ history         │────────────────────────┘
//!                  │ (SearchHistory, │
//!                  │  KeyValueStore) │
//!                  └─────────────────┘
//! ```
//!
//! # Failure model
//!
//! Nothing on the request path returns an error. A missing or malformed
//! catalog gives an empty index, a blank query gives no hits, and a history
//! store that cannot be written is logged and ignored. The one place a caller
//! hears "no" is construction with an invalid [`SearchConfig`].
//!
//! # Usage
//!
//! ```
//! use songdex::{MemoryStore, SearchConfig, SongSearch};
//!
//! let catalog = r#"{ "songs": [
//!     { "id": "canon", "titles": ["Canon in D", "卡农"],
//!       "creators": [{ "name": "Johann Pachelbel" }] }
//! ] }"#;
//!
//! let mut engine =
//!     SongSearch::from_json(catalog, SearchConfig::default(), Box::new(MemoryStore::new()))?;
//!
//! let hits = engine.search("kanong");
//! assert_eq!(hits[0].song_id, "canon");
//!
//! let suggestions = engine.suggest("kan", None);
//! assert_eq!(suggestions.titles[0].text(), "卡农");
//! # Ok::<(), songdex::ConfigError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod history;
pub mod index;
pub mod query;
pub mod romanize;
pub mod scoring;
pub mod suggest;
pub mod testing;
pub mod types;
mod utils;

// Re-exports for public API
pub use config::{MatcherOptions, SearchConfig, SuggestMatcherOptions, DEFAULT_HISTORY_KEY};
pub use engine::{CreatorInfo, SongInfo, SongSearch};
pub use error::{CatalogError, ConfigError, StoreError};
pub use fuzzy::{
    levenshtein_within, FieldKey, FieldMatch, FuzzyMatcher, MatchMode, MatchSettings, RawHit,
    WeightedKey,
};
pub use history::{FileStore, KeyValueStore, MemoryStore, SearchHistory};
pub use index::{build_index, build_index_from_json, build_index_with, parse_catalog_lenient};
pub use query::{preprocess, Query, QueryScope};
pub use romanize::{contains_cjk, PinyinRomanizer, Romanizer};
pub use scoring::{rank, SearchHit};
pub use suggest::{Suggester, Suggestion, SuggestionSet};
pub use types::{
    Catalog, Creator, IndexedCatalog, IndexedCreator, IndexedSong, Song, TextVariants,
};
pub use utils::escape_html;

#[cfg(test)]
mod tests {
    //! Property tests over the whole pipeline.

    use super::*;
    use proptest::prelude::*;

    fn han_title() -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop::sample::select(vec!['卡', '农', '月', '晕', '返', '始', '伴', '奏']),
            1..8,
        )
        .prop_map(|cs| cs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_search_never_panics(query in "\\PC{0,24}") {
            let mut engine = SongSearch::new(
                Some(&testing::sample_catalog()),
                SearchConfig::default(),
                Box::new(MemoryStore::new()),
            ).unwrap();
            let _ = engine.search(&query);
            let _ = engine.suggest(&query, None);
        }

        #[test]
        fn prop_exact_title_ranks_first(title in han_title()) {
            let catalog = Catalog {
                songs: vec![
                    testing::make_song("other", &[&format!("{title}{title}x")]),
                    testing::make_song("target", &[&title]),
                ],
            };
            let mut engine =
                SongSearch::new(Some(&catalog), SearchConfig::default(), Box::new(MemoryStore::new()))
                    .unwrap();
            let hits = engine.search(&title);
            prop_assert_eq!(hits.first().map(|h| h.song_id.as_str()), Some("target"));
        }
    }
}
