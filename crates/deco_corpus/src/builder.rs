//! Corpus derivation: rank truncation, age filtering, union.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{WordEntry, WordFilters};

/// The first `min(limit, len)` entries of a ranked list, order preserved.
///
/// A limit beyond the available length is not an error; the whole list is
/// returned.
pub fn frequency_corpus(ranked: &[String], limit: usize) -> Vec<String> {
    ranked.iter().take(limit).cloned().collect()
}

/// Sort entries ascending by age of acquisition, keep the earliest `top_n`,
/// THEN apply the readability filters.
///
/// Sort-then-slice-then-filter is a deliberate contract: filtering before
/// slicing would change which words survive, and the two orders are not
/// interchangeable.
pub fn age_filtered_corpus(
    entries: &[WordEntry],
    top_n: usize,
    filters: &WordFilters,
) -> BTreeSet<String> {
    let mut sorted: Vec<&WordEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.age_of_acquisition
            .partial_cmp(&b.age_of_acquisition)
            .unwrap_or(Ordering::Equal)
    });

    sorted
        .into_iter()
        .take(top_n)
        .filter(|entry| filters.keeps(&entry.word))
        .map(|entry| entry.word.clone())
        .collect()
}

/// Union of several word sources with de-duplication.
///
/// Ordering is not preserved once combined; callers needing rank order must
/// keep the ranked list separate.
pub fn combined_corpus<I, S>(sources: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = String>,
{
    sources.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, age: f64) -> WordEntry {
        WordEntry::new(word, age)
    }

    #[test]
    fn test_frequency_corpus_truncates_in_rank_order() {
        let ranked: Vec<String> = ["the", "of", "and", "a", "to"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        assert_eq!(frequency_corpus(&ranked, 3), vec!["the", "of", "and"]);
    }

    #[test]
    fn test_frequency_corpus_limit_beyond_length() {
        let ranked = vec!["the".to_string(), "of".to_string()];
        assert_eq!(frequency_corpus(&ranked, 100).len(), 2);
    }

    #[test]
    fn test_age_filter_sorts_then_slices_then_filters() {
        // "window" is earliest-acquired but fails the syllable filter; it
        // still occupies a slot in the top-2 slice, so "sun" never makes it.
        let entries = vec![
            entry("window", 2.0),
            entry("mom", 2.5),
            entry("sun", 3.0),
        ];
        let corpus = age_filtered_corpus(&entries, 2, &WordFilters::default());
        assert_eq!(corpus, BTreeSet::from(["mom".to_string()]));
    }

    #[test]
    fn test_age_filter_respects_filters() {
        let entries = vec![
            entry("mom", 2.0),
            entry("beautiful", 2.1),
            entry("playground", 2.2),
            entry("don't", 2.3),
            entry("cat", 2.4),
        ];
        let corpus = age_filtered_corpus(&entries, 5, &WordFilters::default());
        assert_eq!(corpus, BTreeSet::from(["mom".to_string(), "cat".to_string()]));

        for word in &corpus {
            assert!(crate::words::approximate_syllables(word) <= 1);
            assert!(word.chars().count() <= 6);
            assert!(crate::words::is_alphabetic(word));
        }
    }

    #[test]
    fn test_combined_corpus_dedupes() {
        let fry = vec!["the".to_string(), "cat".to_string()];
        let aoa = vec!["cat".to_string(), "mom".to_string()];
        let combined = combined_corpus([fry, aoa]);
        assert_eq!(combined.len(), 3);
        assert!(combined.contains("cat"));
    }
}
