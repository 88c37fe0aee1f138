//! Result cache behavior as seen through the engine.

use super::common::{kaksi_engine, make_word};
use kosha::{CacheConfig, MatchKind, SearchConfig, SearchMode, TieredSearchEngine};

#[test]
fn test_repeat_query_is_served_from_cache() {
    let mut engine = kaksi_engine();

    let cold = engine.search("kaks", SearchMode::Word).unwrap();
    let stats_after_cold = engine.stats();
    let warm = engine.search("kaks", SearchMode::Word).unwrap();
    let stats = engine.stats();

    assert_eq!(cold, warm);
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.tier1_runs, stats_after_cold.tier1_runs);
    assert_eq!(stats.tier2_runs, stats_after_cold.tier2_runs);
}

#[test]
fn test_word_mode_key_ignores_case_and_diacritics() {
    let mut engine = kaksi_engine();

    let cold = engine.search("kaks", SearchMode::Word).unwrap();
    for variant in ["KAKS", "kàks", "  Kåks  "] {
        assert_eq!(engine.search(variant, SearchMode::Word).unwrap(), cold);
    }
    assert_eq!(engine.stats().cache_hits, 3);
    assert_eq!(engine.cache_len(), 1);
}

#[test]
fn test_definition_mode_key_ignores_case_only() {
    let mut engine = kaksi_engine();

    engine.search("basket", SearchMode::Definition).unwrap();
    engine.search("BASKET", SearchMode::Definition).unwrap();
    assert_eq!(engine.stats().cache_hits, 1);

    let accented = engine.search("bäsket", SearchMode::Definition).unwrap();
    assert!(accented.is_empty());
    assert_eq!(engine.stats().cache_misses, 2);
}

#[test]
fn test_modes_do_not_share_entries() {
    let mut engine = kaksi_engine();

    engine.search("basket", SearchMode::Word).unwrap();
    assert!(engine.is_cached("basket", SearchMode::Word));
    assert!(!engine.is_cached("basket", SearchMode::Definition));

    let definition = engine.search("basket", SearchMode::Definition).unwrap();
    assert_eq!(definition.len(), 3);
    assert_eq!(engine.stats().cache_misses, 2);
    assert_eq!(engine.stats().tier3_runs, 1);
    assert_eq!(engine.cache_len(), 2);
}

#[test]
fn test_hundred_and_first_key_evicts_the_first() {
    let mut engine = kaksi_engine();
    let queries: Vec<String> = (0..101).map(|i| format!("q{:03}", i)).collect();

    for query in &queries {
        engine.search(query, SearchMode::Word).unwrap();
    }

    assert_eq!(engine.cache_len(), 100);
    assert!(!engine.is_cached(&queries[0], SearchMode::Word));
    for query in &queries[1..] {
        assert!(engine.is_cached(query, SearchMode::Word), "{} evicted", query);
    }
}

#[test]
fn test_reading_does_not_refresh_age() {
    let mut engine = kaksi_engine();
    let queries: Vec<String> = (0..100).map(|i| format!("q{:03}", i)).collect();
    for query in &queries {
        engine.search(query, SearchMode::Word).unwrap();
    }

    // A hit on the oldest key does not save it
    engine.search(&queries[0], SearchMode::Word).unwrap();
    engine.search("fresh", SearchMode::Word).unwrap();

    assert!(!engine.is_cached(&queries[0], SearchMode::Word));
    assert!(engine.is_cached(&queries[1], SearchMode::Word));
    assert!(engine.is_cached("fresh", SearchMode::Word));
}

#[test]
fn test_zero_capacity_disables_cache() {
    let config = SearchConfig {
        cache: CacheConfig { capacity: 0 },
        ..SearchConfig::default()
    };
    let mut engine = TieredSearchEngine::with_entries(config, vec![make_word("kaksi")]);

    engine.search("kaksi", SearchMode::Word).unwrap();
    engine.search("kaksi", SearchMode::Word).unwrap();

    assert_eq!(engine.cache_len(), 0);
    assert_eq!(engine.stats().cache_hits, 0);
    assert_eq!(engine.stats().tier1_runs, 2);
}

#[test]
fn test_empty_results_are_cached_too() {
    let mut engine = kaksi_engine();

    assert!(engine.search("zzzzzz", SearchMode::Word).unwrap().is_empty());
    assert!(engine.is_cached("zzzzzz", SearchMode::Word));
    engine.search("zzzzzz", SearchMode::Word).unwrap();
    assert_eq!(engine.stats().cache_hits, 1);
}

#[test]
fn test_compatibility_sign_query_agrees_with_its_cache_key() {
    let entries = || vec![make_word("ķaksi"), make_word("kaksia")];

    let cold_plain = TieredSearchEngine::with_entries(SearchConfig::default(), entries())
        .search_ranked("kaks", SearchMode::Word)
        .unwrap();
    let cold_kelvin = TieredSearchEngine::with_entries(SearchConfig::default(), entries())
        .search_ranked("\u{212A}aks", SearchMode::Word)
        .unwrap();
    assert_eq!(cold_kelvin, cold_plain);
    assert!(cold_plain.iter().all(|r| r.kind == MatchKind::Prefix));

    let mut warm = TieredSearchEngine::with_entries(SearchConfig::default(), entries());
    warm.search_ranked("kaks", SearchMode::Word).unwrap();
    assert_eq!(warm.search_ranked("\u{212A}aks", SearchMode::Word).unwrap(), cold_kelvin);
    assert_eq!(warm.stats().cache_hits, 1);
}
