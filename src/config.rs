// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every option has a default, so a config document only needs the keys it
//! wants to change:
//!
//! ```json
//! { "historyLimit": 20, "matcher": { "threshold": 0.3, "fieldWeights": { "titles": 3.0 } } }
//! ```
//!
//! Values are checked once, at construction. After that the engine trusts them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fuzzy::{FieldKey, MatchSettings, WeightedKey};

/// Storage key history is persisted under.
pub const DEFAULT_HISTORY_KEY: &str = "songSearchHistory";

/// Top-level engine options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Neither record queries nor suggest from history.
    pub disable_history: bool,
    pub history_limit: usize,
    /// Suggestion limit when the caller does not pass one.
    pub max_suggestions: usize,
    pub history_key: String,
    pub matcher: MatcherOptions,
    pub suggest_matcher: SuggestMatcherOptions,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            disable_history: false,
            history_limit: 10,
            max_suggestions: 5,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            matcher: MatcherOptions::default(),
            suggest_matcher: SuggestMatcherOptions::default(),
        }
    }
}

impl SearchConfig {
    /// Parse a (partial) JSON config over the defaults and validate it.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit(self.history_limit));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::InvalidMaxSuggestions(self.max_suggestions));
        }
        check_threshold(self.matcher.threshold)?;
        check_threshold(self.suggest_matcher.threshold)?;
        for (key, &weight) in &self.matcher.field_weights {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: key.path().to_string(),
                    weight,
                });
            }
        }
        for pair in FieldKey::ALL.windows(2) {
            let (higher, lower) = (pair[0], pair[1]);
            let higher_weight = self.matcher.weight_of(higher);
            let lower_weight = self.matcher.weight_of(lower);
            if lower_weight >= higher_weight {
                return Err(ConfigError::WeightOrder {
                    higher: higher.path().to_string(),
                    lower: lower.path().to_string(),
                    higher_weight,
                    lower_weight,
                });
            }
        }
        Ok(())
    }
}

fn check_threshold(threshold: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange(threshold))
    }
}

/// Tuning for the main search matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherOptions {
    pub threshold: f64,
    pub distance: usize,
    pub location: usize,
    pub ignore_location: bool,
    pub ignore_diacritics: bool,
    /// Overrides of [`FieldKey::default_weight`]. Keys not listed keep the default.
    /// Effective weights must stay strictly decreasing in [`FieldKey::ALL`] order.
    pub field_weights: BTreeMap<FieldKey, f64>,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        let defaults = MatchSettings::default();
        Self {
            threshold: defaults.threshold,
            distance: defaults.distance,
            location: defaults.location,
            ignore_location: defaults.ignore_location,
            ignore_diacritics: defaults.ignore_diacritics,
            field_weights: BTreeMap::new(),
        }
    }
}

impl MatcherOptions {
    pub fn weight_of(&self, key: FieldKey) -> f64 {
        self.field_weights
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_weight())
    }

    /// Every searchable key with its effective weight, in priority order.
    pub fn weighted_keys(&self) -> Vec<WeightedKey> {
        FieldKey::ALL
            .iter()
            .map(|&key| WeightedKey {
                key,
                weight: self.weight_of(key),
            })
            .collect()
    }

    pub fn settings(&self) -> MatchSettings {
        MatchSettings {
            threshold: self.threshold,
            distance: self.distance,
            location: self.location,
            ignore_location: self.ignore_location,
            ignore_diacritics: self.ignore_diacritics,
        }
    }
}

/// Tuning for the suggestion matcher. Location never matters for suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestMatcherOptions {
    pub threshold: f64,
}

impl Default for SuggestMatcherOptions {
    fn default() -> Self {
        Self { threshold: 0.4 }
    }
}

impl SuggestMatcherOptions {
    pub fn settings(&self, ignore_diacritics: bool) -> MatchSettings {
        MatchSettings {
            threshold: self.threshold,
            ignore_location: true,
            ignore_diacritics,
            ..MatchSettings::default()
        }
    }
}
