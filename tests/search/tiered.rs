//! Tier interaction through the engine: the fuzzy trigger, merging, caps.

use super::common::{engine_with, engine_with_words, prefixed_entries, search_kinds};
use kosha::{Limits, MatchKind, SearchConfig, SearchMode, TieredSearchEngine};
use std::collections::HashSet;

// ============================================================================
// FUZZY TRIGGER
// ============================================================================

#[test]
fn test_ten_tier1_hits_skip_fuzzy() {
    let mut engine = engine_with(prefixed_entries("ka", 10));
    let results = search_kinds(&mut engine, "ka", SearchMode::Word);

    assert_eq!(results.len(), 10);
    assert_eq!(engine.stats().tier1_runs, 1);
    assert_eq!(engine.stats().tier2_runs, 0, "fuzzy tier must not run");
}

#[test]
fn test_nine_tier1_hits_run_fuzzy() {
    let mut engine = engine_with(prefixed_entries("ka", 9));
    engine.search("ka", SearchMode::Word).unwrap();

    assert_eq!(engine.stats().tier2_runs, 1);
}

#[test]
fn test_tier1_is_capped_at_twenty() {
    let mut engine = engine_with(prefixed_entries("ka", 45));
    let results = search_kinds(&mut engine, "ka", SearchMode::Word);

    assert_eq!(results.len(), 20);
    assert_eq!(results[0].0, "ka000");
    assert_eq!(results[19].0, "ka019");
}

// ============================================================================
// FUZZY FALLBACK
// ============================================================================

#[test]
fn test_typo_is_recovered_by_fuzzy_tier() {
    let mut engine = engine_with_words(&["kaksi", "mountain"]);
    let results = search_kinds(&mut engine, "kazsi", SearchMode::Word);

    assert_eq!(results, vec![("kaksi".to_string(), MatchKind::Fuzzy)]);
}

#[test]
fn test_fuzzy_tier_ignores_diacritics() {
    let mut engine = engine_with_words(&["kàksi"]);

    let plain = search_kinds(&mut engine, "kazsi", SearchMode::Word);
    let accented = search_kinds(&mut engine, "kázsi", SearchMode::Word);

    assert_eq!(plain, vec![("kàksi".to_string(), MatchKind::Fuzzy)]);
    assert_eq!(accented, plain);
}

#[test]
fn test_fuzzy_tier_is_capped_at_thirty() {
    let mut engine = engine_with(prefixed_entries("bora", 80));
    let results = search_kinds(&mut engine, "borx", SearchMode::Word);

    assert_eq!(results.len(), 30);
    assert!(results.iter().all(|(_, kind)| *kind == MatchKind::Fuzzy));
    // Equal scores fall back to list order
    assert_eq!(results[0].0, "bora000");
    assert_eq!(results[29].0, "bora029");
}

#[test]
fn test_closer_fuzzy_match_ranks_first() {
    let mut engine = engine_with_words(&["kxxsi", "kaxsi"]);
    let results = search_kinds(&mut engine, "kaksi", SearchMode::Word);

    let found: Vec<&str> = results.iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(found, vec!["kaxsi", "kxxsi"]);
}

#[test]
fn test_short_query_tolerates_no_edits() {
    let mut engine = engine_with_words(&["xy"]);
    assert!(search_kinds(&mut engine, "ab", SearchMode::Word).is_empty());
}

// ============================================================================
// MERGING
// ============================================================================

#[test]
fn test_tier1_hits_are_not_repeated_by_fuzzy_tier() {
    let mut engine = engine_with_words(&["kaksi", "kaksia", "bakaksi"]);
    let results = search_kinds(&mut engine, "kaksi", SearchMode::Word);

    assert_eq!(
        results,
        vec![
            ("kaksi".to_string(), MatchKind::Exact),
            ("kaksia".to_string(), MatchKind::Prefix),
            ("bakaksi".to_string(), MatchKind::Fuzzy),
        ]
    );
}

#[test]
fn test_fuzzy_duplicates_by_case_are_dropped() {
    let mut engine = engine_with_words(&["kaksi", "KAKSI", "kaxsi"]);
    let results = search_kinds(&mut engine, "kaxsi", SearchMode::Word);

    let mut seen = HashSet::new();
    for (word, _) in &results {
        assert!(seen.insert(word.to_lowercase()), "duplicate {:?}", word);
    }
    assert_eq!(results[0], ("kaxsi".to_string(), MatchKind::Exact));
}

#[test]
fn test_total_cap_applies_after_merge() {
    let mut config = SearchConfig::default();
    config.limits = Limits {
        total: 5,
        ..Limits::default()
    };
    let mut engine = TieredSearchEngine::with_entries(config, prefixed_entries("bora", 40));

    let results = search_kinds(&mut engine, "borx", SearchMode::Word);
    assert_eq!(results.len(), 5);
}

#[test]
fn test_word_results_never_exceed_fifty() {
    let mut engine = engine_with(prefixed_entries("ka", 200));
    for query in ["k", "ka", "ka1", "kx", "ka0", "zzz"] {
        let results = engine.search(query, SearchMode::Word).unwrap();
        assert!(results.len() <= 50, "query {:?} returned {}", query, results.len());
    }
}
