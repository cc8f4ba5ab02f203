//! Token classification against phonics targets and known words.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use deco_phonics::{PhonicsTarget, PronunciationDict};

/// Classification bucket for a single token.
///
/// The buckets partition every token: none overlap and none are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    /// The token exercises the lesson's target phonics.
    TargetPhonics,
    /// The token is a sight word the learner already knows.
    Known,
    /// Neither: the token is outside the learner's current toolkit.
    Leftover,
}

/// Classify one normalized token.
///
/// The phonics check runs first: a token that exercises the target pattern
/// counts as `TargetPhonics` even when it is also a known sight word. The
/// precedence is part of the contract, not an accident of ordering.
pub fn classify(
    dict: &PronunciationDict,
    token: &str,
    target: &PhonicsTarget,
    known_words: &BTreeSet<String>,
) -> WordClass {
    if target.matches(dict, token) {
        WordClass::TargetPhonics
    } else if known_words.contains(token) {
        WordClass::Known
    } else {
        WordClass::Leftover
    }
}
