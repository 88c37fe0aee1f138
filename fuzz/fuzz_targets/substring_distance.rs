// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded substring edit distance.
//!
//! The bound is a filter, not an approximation: raising `max` may only
//! reveal a distance that was previously hidden, never change one.

#![no_main]

use arbitrary::Arbitrary;
use kosha::fuzzy::substring_distance;
use libfuzzer_sys::fuzz_target;

/// Fuzz input for substring distance
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(24).collect();
    let text: String = input.text.chars().take(48).collect();
    let max = usize::from(input.max % 16);

    let bounded = substring_distance(&pattern, &text, max);
    let unbounded = substring_distance(&pattern, &text, usize::MAX / 2);

    // Pattern length is always achievable by deleting every pattern char
    let full = unbounded.expect("unbounded distance always exists");
    assert!(full <= pattern.chars().count());

    match bounded {
        Some(d) => assert_eq!(d, full),
        None => assert!(full > max),
    }

    // Exact substrings cost nothing
    if text.contains(pattern.as_str()) {
        assert_eq!(full, 0);
    }
});
