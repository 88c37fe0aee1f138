//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{WordEntry, WordList};

/// Create an entry with every field set.
pub fn make_entry(word: &str, pos: &str, definition: &str) -> WordEntry {
    WordEntry::new(word, pos, definition)
}

/// Create an entry with a noun tag and a placeholder definition.
pub fn make_word(word: &str) -> WordEntry {
    WordEntry::new(word, "n", format!("definition of {}", word))
}

/// Build a list from bare headwords.
pub fn word_list(words: &[&str]) -> WordList {
    WordList::new(words.iter().map(|w| make_word(w)).collect())
}

/// The three-entry dictionary used by the end-to-end scenarios.
pub fn kaksi_entries() -> Vec<WordEntry> {
    vec![
        make_entry("kaksi", "n", "a basket"),
        make_entry("kaksia", "n", "baskets"),
        make_entry("ককসি", "n", "a basket (Bengali script)"),
    ]
}

/// `count` distinct headwords sharing `prefix`: `prefix000`, `prefix001`, ...
pub fn prefixed_entries(prefix: &str, count: usize) -> Vec<WordEntry> {
    (0..count)
        .map(|i| make_word(&format!("{}{:03}", prefix, i)))
        .collect()
}
