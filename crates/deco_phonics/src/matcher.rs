//! Phoneme and orthographic pattern matching.

use std::collections::BTreeSet;

use regex::Regex;

use crate::dict::PronunciationDict;
use crate::error::PhonicsResult;

/// True iff at least one phoneme in `phonemes` occurs as an exact symbol
/// within at least one pronunciation variant of `word`.
///
/// Stress markers are significant: "AA1" and "AA0" are distinct symbols.
/// This is an ANY-phoneme, ANY-variant match, not an all-of match. An empty
/// phoneme set never matches, and neither does an out-of-vocabulary word.
pub fn matches_phoneme(
    dict: &PronunciationDict,
    word: &str,
    phonemes: &BTreeSet<String>,
) -> bool {
    if phonemes.is_empty() {
        return false;
    }
    dict.lookup(word)
        .iter()
        .any(|variant| variant.iter().any(|symbol| phonemes.contains(symbol)))
}

/// Regex-backed check for lesson rules with no clean single-phoneme
/// representation, e.g. a vowel-consonant-silent-"e" ending.
#[derive(Debug, Clone)]
pub struct OrthographicPattern {
    name: String,
    regex: Regex,
}

impl OrthographicPattern {
    /// Compile a named pattern.
    pub fn new(name: impl Into<String>, pattern: &str) -> PhonicsResult<Self> {
        Ok(Self {
            name: name.into(),
            regex: Regex::new(pattern)?,
        })
    }

    /// Vowel-consonant-silent-"e" ending ("cake", "ride", "hope").
    pub fn vowel_consonant_e() -> Self {
        Self {
            name: "vowel_consonant_e".to_string(),
            regex: Regex::new("[aeiou][b-df-hj-np-tv-z]e$").unwrap(),
        }
    }

    /// Pattern name for display and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the lowercased word matches the pattern.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(&word.trim().to_lowercase())
    }
}

/// A lesson's phonics target.
///
/// Phonemic where the rule has stress-marked symbols; orthographic only as
/// the fallback for rules defined by spelling.
#[derive(Debug, Clone)]
pub enum PhonicsTarget {
    Phonemes(BTreeSet<String>),
    Orthographic(OrthographicPattern),
}

impl PhonicsTarget {
    /// Build a phonemic target from symbol strings.
    pub fn phonemes<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Phonemes(symbols.into_iter().map(Into::into).collect())
    }

    /// Whether a word exercises this target.
    pub fn matches(&self, dict: &PronunciationDict, word: &str) -> bool {
        match self {
            Self::Phonemes(set) => matches_phoneme(dict, word, set),
            Self::Orthographic(pattern) => pattern.is_match(word),
        }
    }

    /// A target with no phonemes matches nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Phonemes(set) => set.is_empty(),
            Self::Orthographic(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dict() -> PronunciationDict {
        let mut dict = PronunciationDict::new();
        dict.insert("cake", vec!["K".into(), "EY1".into(), "K".into()]);
        dict.insert("cat", vec!["K".into(), "AE1".into(), "T".into()]);
        dict.insert("sofa", vec!["S".into(), "OW1".into(), "F".into(), "AH0".into()]);
        dict
    }

    #[test]
    fn test_matches_phoneme_any_of() {
        let dict = sample_dict();
        let targets = BTreeSet::from(["K".to_string(), "EY1".to_string()]);
        assert!(matches_phoneme(&dict, "cake", &targets));
        assert!(matches_phoneme(&dict, "cat", &targets)); // via "K"
    }

    #[test]
    fn test_stress_markers_are_distinct() {
        let dict = sample_dict();
        // "sofa" carries AH0, not AH1.
        let stressed = BTreeSet::from(["AH1".to_string()]);
        assert!(!matches_phoneme(&dict, "sofa", &stressed));

        let unstressed = BTreeSet::from(["AH0".to_string()]);
        assert!(matches_phoneme(&dict, "sofa", &unstressed));
    }

    #[test]
    fn test_empty_phoneme_set_never_matches() {
        let dict = sample_dict();
        assert!(!matches_phoneme(&dict, "cake", &BTreeSet::new()));
    }

    #[test]
    fn test_out_of_vocabulary_never_matches() {
        let dict = sample_dict();
        let targets = BTreeSet::from(["K".to_string()]);
        assert!(!matches_phoneme(&dict, "zyzzyva", &targets));
    }

    #[test]
    fn test_vowel_consonant_e_pattern() {
        let pattern = OrthographicPattern::vowel_consonant_e();
        assert!(pattern.is_match("cake"));
        assert!(pattern.is_match("Ride"));
        assert!(!pattern.is_match("cat"));
        assert!(!pattern.is_match("see"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(OrthographicPattern::new("broken", "[unclosed").is_err());
    }

    #[test]
    fn test_target_dispatch() {
        let dict = sample_dict();

        let phonemic = PhonicsTarget::phonemes(["EY1"]);
        assert!(phonemic.matches(&dict, "cake"));
        assert!(!phonemic.matches(&dict, "cat"));

        // Orthographic fallback works without any dictionary entry.
        let orthographic = PhonicsTarget::Orthographic(OrthographicPattern::vowel_consonant_e());
        assert!(orthographic.matches(&dict, "ride"));

        assert!(PhonicsTarget::phonemes(Vec::<String>::new()).is_empty());
    }
}
