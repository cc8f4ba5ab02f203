//! Word normalization and readability heuristics.

/// Normalize a raw token for membership tests and pronunciation lookups:
/// surrounding whitespace and punctuation stripped, then lowercased.
///
/// Interior punctuation survives, so "don't" stays intact while "dog!"
/// becomes "dog".
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}

/// Approximate syllable count: the number of maximal runs of the letters
/// a/e/i/o/u/y in the lowercased word, never less than 1.
///
/// The heuristic is approximate by contract, not phonetically accurate;
/// its exact behavior is pinned by the tests below.
pub fn approximate_syllables(word: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in word.to_lowercase().chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }
    runs.max(1)
}

/// Whether a word is non-empty and purely alphabetic.
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_case() {
        assert_eq!(normalize_word("Dog!"), "dog");
        assert_eq!(normalize_word("\"cat,\""), "cat");
        assert_eq!(normalize_word("  POND  "), "pond");
        assert_eq!(normalize_word("don't"), "don't");
        assert_eq!(normalize_word("..."), "");
    }

    #[test]
    fn test_syllable_runs() {
        assert_eq!(approximate_syllables("cat"), 1);
        assert_eq!(approximate_syllables("tree"), 1); // "ee" is one run
        assert_eq!(approximate_syllables("cake"), 2); // "a" and "e"
        assert_eq!(approximate_syllables("rhythm"), 1); // "y" counts
        assert_eq!(approximate_syllables("beautiful"), 3); // "eau", "i", "u"
    }

    #[test]
    fn test_syllables_never_below_one() {
        assert_eq!(approximate_syllables("tsk"), 1);
        assert_eq!(approximate_syllables(""), 1);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("pond"));
        assert!(!is_alphabetic("don't"));
        assert!(!is_alphabetic("co2"));
        assert!(!is_alphabetic(""));
    }
}
