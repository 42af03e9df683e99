// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how raw fuzzy hits get their final order.
//!
//! The key insight is that the matcher's score conflates too many signals to
//! be trusted on its own. An exact title match must win no matter what the
//! number says, so ranking is an explicit comparator over semantic flags, with
//! the fuzzy score only as the last resort.

pub mod ranking;

pub use ranking::{compare_keys, rank, RankKey, SearchHit};
