// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Three layers here: a bounded Levenshtein for one-off comparisons and
//! approximate substring alignment, the field table ([`FieldKey`]) that says
//! what can be searched and how much it counts, and the weighted multi-field
//! [`FuzzyMatcher`] that turns a pattern into scored, span-annotated hits.
//!
//! Scores follow the "0 is perfect" convention throughout.

mod keys;
mod levenshtein;
mod matcher;

pub use keys::*;
pub use levenshtein::*;
pub use matcher::*;
