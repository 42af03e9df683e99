// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted multi-field approximate matching.
//!
//! For every song the matcher looks at each value of each configured field,
//! finds where (and how well) the pattern fits, and folds the per-value scores
//! into one song score:
//!
//! ```text
//! value score = errors / pattern_len + |start - location| / distance
//! song score  = Π max(value_score, ε) ^ (weight / Σweights · 1 / √tokens)
//! ```
//!
//! A value whose score exceeds the threshold does not count. Every factor is
//! at most 1, so each extra matching value can only improve the song score.
//! Heavier fields pull harder; long multi-token values pull softer.
//!
//! Hits come back in catalog order. Ordering them is the ranker's job.

use std::ops::Range;

use serde::Serialize;

use super::keys::FieldKey;
use super::levenshtein::substring_alignments;
use crate::types::{IndexedCatalog, IndexedSong};
use crate::utils::fold_chars;

/// How a pattern has to relate to a field value to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Approximate substring, scored by edit distance and position.
    Fuzzy,
    /// Value starts with the pattern. Always scores 0.
    Prefix,
    /// Value contains the pattern. Always scores 0; every occurrence is a span.
    Include,
}

/// A searchable field and how much it contributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedKey {
    pub key: FieldKey,
    pub weight: f64,
}

/// Matcher tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    /// Highest value score still accepted, in `[0, 1]`.
    pub threshold: f64,
    /// Offset distance that costs a full point. 0 makes any displacement fatal.
    pub distance: usize,
    /// Expected match offset.
    pub location: usize,
    pub ignore_location: bool,
    pub ignore_diacritics: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: 0.45,
            distance: 100,
            location: 0,
            ignore_location: false,
            ignore_diacritics: false,
        }
    }
}

/// One matched field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    pub key: FieldKey,
    /// Position of the value within its field (see [`FieldKey::values`]).
    pub value_index: usize,
    pub value: String,
    /// Matched char ranges of `value`, ascending and non-overlapping.
    pub spans: Vec<Range<usize>>,
    pub score: f64,
}

/// A song that matched at least one field value.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHit {
    /// Position of the song in the [`IndexedCatalog`].
    pub position: usize,
    /// Combined score, 0 = perfect.
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

impl RawHit {
    /// Matches on one field.
    pub fn matches_on(&self, key: FieldKey) -> impl Iterator<Item = &FieldMatch> {
        self.matches.iter().filter(move |m| m.key == key)
    }
}

/// Multi-field fuzzy matcher over an [`IndexedCatalog`].
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    keys: Vec<WeightedKey>,
    settings: MatchSettings,
}

impl FuzzyMatcher {
    pub fn new(keys: Vec<WeightedKey>, settings: MatchSettings) -> Self {
        Self { keys, settings }
    }

    /// Matcher over `keys` with every weight set to 1.
    pub fn with_equal_weights(keys: &[FieldKey], settings: MatchSettings) -> Self {
        let keys = keys.iter().map(|&key| WeightedKey { key, weight: 1.0 }).collect();
        Self::new(keys, settings)
    }

    pub fn keys(&self) -> &[WeightedKey] {
        &self.keys
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Fuzzy search across every configured key.
    pub fn search(&self, catalog: &IndexedCatalog, pattern: &str) -> Vec<RawHit> {
        self.run(catalog, pattern, &self.keys, MatchMode::Fuzzy)
    }

    /// Search only `scope`, with the given mode.
    ///
    /// Keys keep their configured weight; keys this matcher was not built with
    /// fall back to their default weight.
    pub fn search_keys(
        &self,
        catalog: &IndexedCatalog,
        pattern: &str,
        scope: &[FieldKey],
        mode: MatchMode,
    ) -> Vec<RawHit> {
        let keys: Vec<WeightedKey> = scope
            .iter()
            .map(|&key| WeightedKey {
                key,
                weight: self
                    .keys
                    .iter()
                    .find(|k| k.key == key)
                    .map_or_else(|| key.default_weight(), |k| k.weight),
            })
            .collect();
        self.run(catalog, pattern, &keys, mode)
    }

    fn run(
        &self,
        catalog: &IndexedCatalog,
        pattern: &str,
        keys: &[WeightedKey],
        mode: MatchMode,
    ) -> Vec<RawHit> {
        let pattern = fold_chars(pattern, self.settings.ignore_diacritics);
        let total_weight: f64 = keys.iter().map(|k| k.weight).sum();
        if pattern.is_empty() || keys.is_empty() || total_weight <= 0.0 {
            return Vec::new();
        }

        catalog
            .songs
            .iter()
            .enumerate()
            .filter_map(|(position, song)| {
                self.match_song(song, &pattern, keys, total_weight, mode)
                    .map(|(score, matches)| RawHit {
                        position,
                        score,
                        matches,
                    })
            })
            .collect()
    }

    fn match_song(
        &self,
        song: &IndexedSong,
        pattern: &[char],
        keys: &[WeightedKey],
        total_weight: f64,
        mode: MatchMode,
    ) -> Option<(f64, Vec<FieldMatch>)> {
        let mut matches = Vec::new();
        let mut total = 1.0_f64;

        for wk in keys {
            for (value_index, value) in wk.key.values(song) {
                let Some((score, spans)) = self.match_value(pattern, value, wk.key, mode) else {
                    continue;
                };
                let tokens = value.split_whitespace().count().max(1) as f64;
                let exponent = wk.weight / total_weight / tokens.sqrt();
                total *= score.max(f64::EPSILON).powf(exponent);
                matches.push(FieldMatch {
                    key: wk.key,
                    value_index,
                    value: value.to_string(),
                    spans,
                    score,
                });
            }
        }

        (!matches.is_empty()).then_some((total, matches))
    }

    /// Score and spans of `pattern` in one value, or `None` when it does not fit.
    fn match_value(
        &self,
        pattern: &[char],
        value: &str,
        key: FieldKey,
        mode: MatchMode,
    ) -> Option<(f64, Vec<Range<usize>>)> {
        let text = fold_chars(value, self.settings.ignore_diacritics);
        match mode {
            MatchMode::Prefix => text
                .starts_with(pattern)
                .then(|| (0.0, vec![0..pattern.len()])),
            MatchMode::Include => {
                let spans = occurrences(pattern, &text);
                (!spans.is_empty()).then_some((0.0, spans))
            }
            MatchMode::Fuzzy => self.fuzzy_value(pattern, &text, key),
        }
    }

    fn fuzzy_value(
        &self,
        pattern: &[char],
        text: &[char],
        key: FieldKey,
    ) -> Option<(f64, Vec<Range<usize>>)> {
        let m = pattern.len();
        let max_errors = (self.settings.threshold * m as f64).floor() as usize;
        let ignore_location = self.settings.ignore_location || key.is_position_free();

        let scored: Vec<(f64, usize, Range<usize>)> = substring_alignments(pattern, text, max_errors)
            .into_iter()
            .map(|a| {
                let accuracy = a.errors as f64 / m as f64;
                let proximity = if ignore_location {
                    0.0
                } else {
                    self.proximity(a.span.start)
                };
                (accuracy + proximity, a.errors, a.span)
            })
            .filter(|(score, _, _)| *score <= self.settings.threshold)
            .collect();

        let best = scored
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.2.start.cmp(&b.2.start)))?;
        let (best_score, best_errors) = (best.0, best.1);

        // Report every equally clean placement, leftmost first, without overlap.
        let mut candidates: Vec<Range<usize>> = scored
            .into_iter()
            .filter(|(_, errors, _)| *errors == best_errors)
            .map(|(_, _, span)| span)
            .collect();
        candidates.sort_by_key(|s| (s.start, s.end));

        let mut spans: Vec<Range<usize>> = Vec::new();
        for span in candidates {
            if spans.last().map_or(true, |last| span.start >= last.end) {
                spans.push(span);
            }
        }

        Some((best_score, spans))
    }

    fn proximity(&self, start: usize) -> f64 {
        let offset = start.abs_diff(self.settings.location);
        if self.settings.distance == 0 {
            if offset == 0 {
                0.0
            } else {
                1.0
            }
        } else {
            offset as f64 / self.settings.distance as f64
        }
    }
}

/// Every non-overlapping occurrence of `pattern` in `text`, left to right.
fn occurrences(pattern: &[char], text: &[char]) -> Vec<Range<usize>> {
    let m = pattern.len();
    let mut spans = Vec::new();
    if m == 0 || text.len() < m {
        return spans;
    }
    let mut i = 0;
    while i + m <= text.len() {
        if text[i..i + m] == *pattern {
            spans.push(i..i + m);
            i += m;
        } else {
            i += 1;
        }
    }
    spans
}
