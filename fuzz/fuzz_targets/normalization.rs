// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for diacritic folding and prefix patterns.
//!
//! Folding must be idempotent for any input, and a compiled prefix pattern
//! must accept the text it was built from. Arbitrary Unicode finds the case
//! mappings that a hand-picked alphabet never will.

#![no_main]

use kosha::{normalize, PrefixPattern};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // Cap length to avoid timeouts
    let text: String = text.chars().take(64).collect();

    let once = normalize(&text);
    let twice = normalize(&once);
    assert_eq!(once, twice, "normalize not idempotent for {:?}", text);

    let pattern = PrefixPattern::new(&text);
    assert!(
        pattern.matches(&text, &once),
        "pattern for {:?} rejects its own text",
        text
    );
});
