// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: every alignment path crosses every DP row, so the minimum
//! of a row is a lower bound on the final distance. Once a whole row is over
//! budget, stop. For whole-string comparison `|len(a) - len(b)|` is an even
//! cheaper bound and skips the DP entirely.
//!
//! [`substring_alignments`] is the free-start, free-end variant (Sellers): it
//! finds where in a longer text the pattern fits best, which is what field
//! matching needs.

use std::ops::Range;

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}

/// One placement of a pattern inside a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub errors: usize,
    /// Matched text, in char offsets.
    pub span: Range<usize>,
}

/// Every non-empty placement of `pattern` in `text` with at most `max_errors`
/// edits, one per end offset, ordered by end offset.
///
/// When several placements end at the same offset with the same cost the
/// tightest one (latest start) wins. Returns an empty vec as soon as a DP row
/// proves nothing can fit.
pub fn substring_alignments(pattern: &[char], text: &[char], max_errors: usize) -> Vec<Alignment> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || n == 0 {
        return Vec::new();
    }

    // Row 0: the pattern may start anywhere for free.
    let mut prev_cost: Vec<usize> = vec![0; n + 1];
    let mut prev_start: Vec<usize> = (0..=n).collect();
    let mut cost = vec![0usize; n + 1];
    let mut start = vec![0usize; n + 1];

    for (i, &pc) in pattern.iter().enumerate() {
        cost[0] = i + 1;
        start[0] = 0;
        let mut min_row = cost[0];

        for j in 1..=n {
            let diag = (prev_cost[j - 1] + usize::from(pc != text[j - 1]), prev_start[j - 1]);
            let up = (prev_cost[j] + 1, prev_start[j]);
            let left = (cost[j - 1] + 1, start[j - 1]);

            let best = [up, left]
                .into_iter()
                .fold(diag, |acc, cand| {
                    if cand.0 < acc.0 || (cand.0 == acc.0 && cand.1 > acc.1) {
                        cand
                    } else {
                        acc
                    }
                });
            cost[j] = best.0;
            start[j] = best.1;
            min_row = min_row.min(best.0);
        }

        if min_row > max_errors {
            return Vec::new();
        }

        std::mem::swap(&mut prev_cost, &mut cost);
        std::mem::swap(&mut prev_start, &mut start);
    }

    // After the final swap the last row lives in prev_*.
    (1..=n)
        .filter(|&j| prev_cost[j] <= max_errors && prev_start[j] < j)
        .map(|j| Alignment {
            errors: prev_cost[j],
            span: prev_start[j]..j,
        })
        .collect()
}
