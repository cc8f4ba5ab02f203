//! # deco_phonics
//!
//! Pronunciation lookup and phonics pattern matching for DecoRead.
//!
//! This crate provides:
//! - **PronunciationDict**: an in-memory CMU-format dictionary resolving a
//!   word to its known pronunciation variants
//! - **Phoneme matching**: exact stress-marked symbol membership across
//!   variants
//! - **Orthographic patterns**: regex-backed fallback for lesson rules with
//!   no clean single-phoneme representation
//!
//! ## Example
//!
//! ```rust,ignore
//! use deco_phonics::{PhonicsTarget, PronunciationDict};
//!
//! let dict = PronunciationDict::read_file("data/cmudict.txt")?;
//! let target = PhonicsTarget::phonemes(["AE1"]);
//! assert!(target.matches(&dict, "cat"));
//! ```

pub mod dict;
pub mod error;
pub mod matcher;

pub use dict::{PhonemeSeq, PronunciationDict};
pub use error::{PhonicsError, PhonicsResult};
pub use matcher::{matches_phoneme, OrthographicPattern, PhonicsTarget};
