//! Search invariants over generated dictionaries.

use super::common::make_word;
use kosha::fuzzy::substring_distance;
use kosha::{MatchKind, SearchConfig, SearchMode, TieredSearchEngine};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet so queries actually collide with them.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[kasiàá]{1,7}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..120)
}

fn engine_for(words: &[String]) -> TieredSearchEngine {
    TieredSearchEngine::with_entries(
        SearchConfig::default(),
        words.iter().map(|w| make_word(w)).collect(),
    )
}

// ============================================================================
// ORACLES
// ============================================================================

/// Textbook Levenshtein distance.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut curr = vec![i + 1; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        prev = curr;
    }
    prev[b.len()]
}

/// Minimum distance from `pattern` to any substring of `text`, by brute force.
fn brute_force_substring_distance(pattern: &str, text: &str) -> usize {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    let mut best = p.len();
    for start in 0..=t.len() {
        for end in start..=t.len() {
            best = best.min(levenshtein(&p, &t[start..end]));
        }
    }
    best
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_substring_distance_matches_brute_force(
        pattern in "[abc]{0,6}",
        text in "[abc]{0,8}",
        max in 0usize..7,
    ) {
        let expected = brute_force_substring_distance(&pattern, &text);
        let actual = substring_distance(&pattern, &text, max);
        if expected <= max {
            prop_assert_eq!(actual, Some(expected));
        } else {
            prop_assert_eq!(actual, None);
        }
    }

    #[test]
    fn prop_result_caps_hold(words in dictionary_strategy(), query in word_strategy()) {
        let mut engine = engine_for(&words);

        let ranked = engine.search_ranked(&query, SearchMode::Word).unwrap();
        prop_assert!(ranked.len() <= 50);
        let tier1 = ranked.iter().filter(|r| r.kind.tier() == 1).count();
        let tier2 = ranked.iter().filter(|r| r.kind == MatchKind::Fuzzy).count();
        prop_assert!(tier1 <= 20);
        prop_assert!(tier2 <= 30);

        let definitions = engine.search(&query, SearchMode::Definition).unwrap();
        prop_assert!(definitions.len() <= 30);
    }

    #[test]
    fn prop_fuzzy_never_repeats_a_word(words in dictionary_strategy(), query in word_strategy()) {
        let mut engine = engine_for(&words);
        let ranked = engine.search_ranked(&query, SearchMode::Word).unwrap();

        let mut seen_positions = HashSet::new();
        let mut primary_words = HashSet::new();
        for r in &ranked {
            prop_assert!(seen_positions.insert(r.position));
            let word = engine.entries()[r.position].word.to_lowercase();
            if r.kind.tier() == 1 {
                primary_words.insert(word);
            } else {
                prop_assert!(!primary_words.contains(&word), "fuzzy hit {} repeats Tier 1", word);
            }
        }
    }

    #[test]
    fn prop_exact_matches_lead(words in dictionary_strategy(), query in word_strategy()) {
        let mut engine = engine_for(&words);
        let ranked = engine.search_ranked(&query, SearchMode::Word).unwrap();

        let kinds: Vec<MatchKind> = ranked.iter().map(|r| r.kind).collect();
        let first_non_exact = kinds.iter().position(|k| *k != MatchKind::Exact).unwrap_or(kinds.len());
        prop_assert!(kinds[first_non_exact..].iter().all(|k| *k != MatchKind::Exact));
        let first_fuzzy = kinds.iter().position(|k| *k == MatchKind::Fuzzy).unwrap_or(kinds.len());
        prop_assert!(kinds[first_fuzzy..].iter().all(|k| *k == MatchKind::Fuzzy));
    }

    #[test]
    fn prop_warm_cache_matches_cold_search(words in dictionary_strategy(), query in word_strategy()) {
        let mut engine = engine_for(&words);
        let cold = engine.search(&query, SearchMode::Word).unwrap();
        let warm = engine.search(&query, SearchMode::Word).unwrap();

        let mut fresh = engine_for(&words);
        prop_assert_eq!(&cold, &warm);
        prop_assert_eq!(fresh.search(&query, SearchMode::Word).unwrap(), cold);
        prop_assert_eq!(engine.stats().cache_hits, 1);
    }

    #[test]
    fn prop_tier2_skipped_when_tier1_is_full(count in 10usize..40) {
        let words: Vec<String> = (0..count).map(|i| format!("kas{:03}", i)).collect();
        let mut engine = engine_for(&words);
        engine.search("kas", SearchMode::Word).unwrap();
        prop_assert_eq!(engine.stats().tier2_runs, 0);
    }
}
