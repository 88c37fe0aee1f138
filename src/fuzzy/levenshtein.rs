// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance between a query and the best substring of a word.
//!
//! Plain Levenshtein penalizes every character of the word the query didn't
//! cover, so "kaks" would sit two edits away from "kaksia". Sellers' variant
//! lets the match start and end anywhere in the word: the first DP row is all
//! zeros (free start) and the answer is the minimum of the last row (free
//! end). That is what "position-insensitive" means for Tier 2.
//!
//! Two early exits keep the common case cheap:
//! 1. Fewer word chars than `query_len - max` means too many insertions.
//! 2. Row minima never decrease, so once a row minimum exceeds `max` no
//!    later row can come back under it.

/// Minimum edit distance between `pattern` and any substring of `text`,
/// or `None` if it exceeds `max`.
///
/// Works on `char` slices so callers can fold and split once, up front.
pub fn substring_distance_within(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }

    // Early-exit: unmatched query chars cost one insertion each
    if m > text.len() + max {
        return None;
    }

    let n = text.len();
    // Row 0: empty pattern matches the empty substring anywhere
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for (i, &pc) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &tc) in text.iter().enumerate() {
            let cost = usize::from(pc != tc);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
            row_min = row_min.min(curr[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let best = prev.iter().copied().min().unwrap_or(m);
    (best <= max).then_some(best)
}

/// `&str` convenience wrapper around [`substring_distance_within`].
pub fn substring_distance(pattern: &str, text: &str, max: usize) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    substring_distance_within(&pattern, &text, max)
}
