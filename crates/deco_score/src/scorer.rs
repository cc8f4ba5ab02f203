//! Document scoring against session corpora.

use std::collections::BTreeSet;

use tracing::debug;

use deco_corpus::{normalize_word, Corpora};
use deco_phonics::{PhonicsTarget, PronunciationDict};

use crate::classify::{classify, WordClass};
use crate::report::ScoreReport;

/// Split a document into normalized tokens: whitespace-split, surrounding
/// punctuation stripped, lowercased, empties dropped.
pub fn tokenize(document: &str) -> Vec<String> {
    document
        .split_whitespace()
        .map(normalize_word)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Scores candidate documents against one immutable set of corpora.
///
/// The known-word union is computed once at construction; scoring itself
/// is a pure function over the document.
pub struct DecodabilityScorer<'a> {
    dict: &'a PronunciationDict,
    target: PhonicsTarget,
    known_words: BTreeSet<String>,
}

impl<'a> DecodabilityScorer<'a> {
    /// Create a scorer over a pronunciation dictionary, session corpora,
    /// and the current lesson's phonics target.
    pub fn new(dict: &'a PronunciationDict, corpora: &Corpora, target: PhonicsTarget) -> Self {
        Self {
            dict,
            target,
            known_words: corpora.known_words(),
        }
    }

    /// Classify every token of the document and aggregate the buckets.
    pub fn score(&self, document: &str) -> ScoreReport {
        let tokens = tokenize(document);
        if tokens.is_empty() {
            return ScoreReport::empty();
        }

        let mut target_phonics = 0;
        let mut known = 0;
        let mut leftover = 0;

        for token in &tokens {
            match classify(self.dict, token, &self.target, &self.known_words) {
                WordClass::TargetPhonics => target_phonics += 1,
                WordClass::Known => known += 1,
                WordClass::Leftover => leftover += 1,
            }
        }

        debug!(
            "Scored {} tokens: {} target, {} known, {} leftover",
            tokens.len(),
            target_phonics,
            known,
            leftover
        );
        ScoreReport::from_counts(target_phonics, known, leftover)
    }
}

/// Share of a corpus a document actually uses: distinct document tokens
/// present in the corpus, divided by the corpus size. Zero for an empty
/// corpus.
pub fn coverage_ratio(document: &str, corpus: &BTreeSet<String>) -> f64 {
    if corpus.is_empty() {
        return 0.0;
    }
    used_words(document, corpus).len() as f64 / corpus.len() as f64
}

/// The distinct corpus words a document uses.
pub fn used_words(document: &str, corpus: &BTreeSet<String>) -> BTreeSet<String> {
    tokenize(document)
        .into_iter()
        .filter(|token| corpus.contains(token))
        .collect()
}

/// Lexical diversity: distinct tokens divided by total tokens. Zero for an
/// empty document.
pub fn diversity_ratio(document: &str) -> f64 {
    let tokens = tokenize(document);
    if tokens.is_empty() {
        return 0.0;
    }
    let total = tokens.len();
    let distinct: BTreeSet<String> = tokens.into_iter().collect();
    distinct.len() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_normalizes() {
        let tokens = tokenize("A fox, a dog -- and  a POND!");
        assert_eq!(tokens, vec!["a", "fox", "a", "dog", "and", "a", "pond"]);
    }

    #[test]
    fn test_tokenize_empty_document() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !! ,, ").is_empty());
    }

    #[test]
    fn test_coverage_ratio() {
        let corpus: BTreeSet<String> = ["cat", "mat", "sat", "ram"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let ratio = coverage_ratio("The cat sat. The cat sat again!", &corpus);
        assert!((ratio - 0.5).abs() < 1e-9); // cat, sat of 4

        assert_eq!(coverage_ratio("anything", &BTreeSet::new()), 0.0);
    }

    #[test]
    fn test_used_words() {
        let corpus: BTreeSet<String> = ["cat", "mat"].iter().map(|w| w.to_string()).collect();
        let used = used_words("The cat naps on a cat mat.", &corpus);
        assert_eq!(used, corpus);
    }

    #[test]
    fn test_diversity_ratio() {
        assert_eq!(diversity_ratio(""), 0.0);
        assert!((diversity_ratio("the cat the cat") - 0.5).abs() < 1e-9);
        assert!((diversity_ratio("one two three four") - 1.0).abs() < 1e-9);
    }
}
