// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tiered search engine.
//!
//! Arbitrary word lists and keystrokes must never panic, never exceed the
//! result caps, and a warm cache must return exactly what a cold search did.

#![no_main]

use arbitrary::Arbitrary;
use kosha::{SearchConfig, SearchMode, TieredSearchEngine, WordEntry};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for a search session
#[derive(Debug, Arbitrary)]
struct SessionInput {
    /// Headwords (empty ones are skipped, like the loader does)
    words: Vec<String>,
    /// Keystrokes replayed against one engine
    queries: Vec<String>,
    /// Search definitions instead of headwords
    definition_mode: bool,
}

fuzz_target!(|input: SessionInput| {
    // Cap sizes to avoid timeouts
    let entries: Vec<WordEntry> = input
        .words
        .iter()
        .take(200)
        .filter(|w| !w.trim().is_empty())
        .map(|w| {
            let word: String = w.chars().take(32).collect();
            WordEntry::new(word.clone(), "n", word)
        })
        .collect();

    let mode = if input.definition_mode {
        SearchMode::Definition
    } else {
        SearchMode::Word
    };
    let cap = match mode {
        SearchMode::Word => 50,
        SearchMode::Definition => 30,
    };

    let mut engine = TieredSearchEngine::with_entries(SearchConfig::default(), entries);

    for query in input.queries.iter().take(20) {
        let query: String = query.chars().take(32).collect();
        let cold = engine.search(&query, mode).expect("engine is ready");
        assert!(cold.len() <= cap, "{} results for {:?}", cold.len(), query);

        let warm = engine.search(&query, mode).expect("engine is ready");
        assert_eq!(cold, warm, "cache changed results for {:?}", query);
    }
});
