//! # deco_score
//!
//! Decodability scoring for DecoRead.
//!
//! This crate classifies every token of a candidate document against the
//! session corpora and aggregates the result:
//! - **Tokenizer**: whitespace split, surrounding punctuation stripped,
//!   lowercased, empties dropped
//! - **Classifier**: the `TargetPhonics | Known | Leftover` partition with
//!   an explicit phonics-over-sight-word precedence
//! - **Reports**: percentage breakdowns plus coverage and diversity ratios
//!
//! Every operation here is total: empty documents and out-of-vocabulary
//! words are ordinary values, so the crate has no error type.
//!
//! ## Example
//!
//! ```rust,ignore
//! use deco_phonics::PhonicsTarget;
//! use deco_score::DecodabilityScorer;
//!
//! let scorer = DecodabilityScorer::new(&dict, &corpora, PhonicsTarget::phonemes(["AE1"]));
//! let report = scorer.score("A cat sat on a mat.");
//! println!("{}", report.summary());
//! ```

pub mod classify;
pub mod report;
pub mod scorer;

pub use classify::{classify, WordClass};
pub use report::ScoreReport;
pub use scorer::{
    coverage_ratio, diversity_ratio, tokenize, used_words, DecodabilityScorer,
};
