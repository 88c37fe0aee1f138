//! Normalization laws and the diacritic table.

use kosha::{fold_char, normalize, variants, PrefixPattern, DIACRITIC_GROUPS};
use proptest::prelude::*;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Latin and Greek text with a generous share of accented letters.
fn accented_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z àáâäåèéêëìíîïòóôöøùúûüñçşžÀÉÖÅÑΆάέήίόύώϊΐαβγ0-9ক-হ]{0,24}").unwrap()
}

/// Every character the table folds.
fn table_chars() -> Vec<char> {
    DIACRITIC_GROUPS
        .iter()
        .flat_map(|(_, members)| members.chars())
        .collect()
}

// ============================================================================
// TABLE ORACLE
// ============================================================================

/// Wherever Unicode canonically decomposes a variant, the table agrees on
/// its base letter.
#[test]
fn every_variant_folds_to_its_base() {
    for (base, members) in DIACRITIC_GROUPS {
        for c in members.chars() {
            assert_eq!(fold_char(c), Some(*base), "{:?} should fold to {:?}", c, base);
        }
    }
}

#[test]
fn table_agrees_with_canonical_decomposition() {
    for c in table_chars() {
        let decomposed: Vec<char> = c.to_string().nfd().collect();
        if decomposed.len() < 2 {
            // No canonical decomposition (ø, đ, ł, ...), nothing to compare
            continue;
        }
        let letter: String = decomposed[0].to_lowercase().collect();
        let expected = normalize(&letter);
        assert_eq!(
            normalize(&c.to_string()),
            expected,
            "{:?} decomposes to {:?}",
            c,
            decomposed
        );
    }
}

#[test]
fn variants_round_trip_through_their_base() {
    for (base, _) in DIACRITIC_GROUPS {
        let members = variants(*base).expect("every base has variants");
        assert!(members.contains(base));
        for &v in members {
            assert_eq!(fold_char(v), Some(*base));
        }
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(text in accented_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_preserves_char_count_for_table_text(text in accented_text()) {
        prop_assert_eq!(normalize(&text).chars().count(), text.chars().count());
    }

    #[test]
    fn prop_variant_substitution_is_invisible(
        text in "[a-z]{1,12}",
        picks in prop::collection::vec(any::<prop::sample::Index>(), 12),
    ) {
        // Swap each letter for an arbitrary variant of itself
        let swapped: String = text
            .chars()
            .zip(picks.iter())
            .map(|(c, pick)| {
                let members = variants(c).unwrap_or(&[]);
                if members.is_empty() { c } else { *pick.get(members) }
            })
            .collect();
        prop_assert_eq!(normalize(&swapped), normalize(&text));
    }

    #[test]
    fn prop_prefix_pattern_matches_every_prefix(word in accented_text(), cut in 1usize..24) {
        let word = word.trim();
        let chars: Vec<char> = word.chars().collect();
        prop_assume!(!chars.is_empty());
        let prefix: String = chars[..cut.min(chars.len())].iter().collect();

        let pattern = PrefixPattern::new(&prefix);
        prop_assert!(pattern.matches(word, &normalize(word)));
    }
}
