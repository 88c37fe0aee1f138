//! Definition mode (Tier 3).

use super::common::{engine_with, kaksi_engine, make_entry, prefixed_entries, words};
use kosha::SearchMode;

#[test]
fn test_definition_match_is_case_insensitive() {
    let mut engine = kaksi_engine();
    let results = engine.search("BASKETS", SearchMode::Definition).unwrap();

    assert_eq!(words(&results), vec!["kaksia"]);
}

#[test]
fn test_definition_match_is_diacritic_sensitive() {
    let mut engine = engine_with(vec![
        make_entry("kapi", "n", "café au lait"),
        make_entry("bora", "n", "a cafe table"),
    ]);

    assert_eq!(words(&engine.search("CAFÉ", SearchMode::Definition).unwrap()), vec!["kapi"]);
    assert_eq!(words(&engine.search("cafe", SearchMode::Definition).unwrap()), vec!["bora"]);
}

#[test]
fn test_definition_matches_anywhere_in_text() {
    let mut engine = kaksi_engine();
    let results = engine.search("bengali", SearchMode::Definition).unwrap();

    assert_eq!(words(&results), vec!["ককসি"]);
}

#[test]
fn test_definition_results_are_capped_at_thirty() {
    let mut engine = engine_with(prefixed_entries("ka", 45));
    let results = engine.search("definition of", SearchMode::Definition).unwrap();

    assert_eq!(results.len(), 30);
    assert_eq!(results[0].word, "ka000");
    assert_eq!(results[29].word, "ka029");
}

#[test]
fn test_definition_mode_runs_only_tier3() {
    let mut engine = kaksi_engine();
    engine.search("kaksi", SearchMode::Definition).unwrap();

    let stats = engine.stats();
    assert_eq!(stats.tier3_runs, 1);
    assert_eq!(stats.tier1_runs, 0);
    assert_eq!(stats.tier2_runs, 0);
}

#[test]
fn test_word_mode_does_not_search_definitions() {
    let mut engine = engine_with(vec![make_entry("bora", "n", "a basket")]);

    assert!(engine.search("basket", SearchMode::Word).unwrap().is_empty());
    assert_eq!(engine.stats().tier3_runs, 0);
}

#[test]
fn test_empty_definitions_never_match() {
    let mut engine = engine_with(vec![make_entry("bora", "", "")]);
    assert!(engine.search("a", SearchMode::Definition).unwrap().is_empty());
}
