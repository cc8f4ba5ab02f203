//! # deco_corpus
//!
//! Word corpus builders for DecoRead.
//!
//! This crate derives the immutable word sets a scoring session runs
//! against:
//! - **Normalization**: one lowercase, punctuation-stripped form for every
//!   membership test
//! - **Sources**: ranked frequency lists, age-of-acquisition tables,
//!   comma-delimited word lists
//! - **Builders**: rank-preserving truncation, sort-then-slice-then-filter
//!   age selection, de-duplicating union
//! - **Session**: `SessionConfig` (fry budgets, lesson phoneme targets,
//!   per-grade AoA budgets) and `CorporaBuilder`, which loads every table
//!   once and produces a read-only `Corpora`
//!
//! ## Example
//!
//! ```rust,ignore
//! use deco_corpus::{CorporaBuilder, Grade};
//!
//! let corpora = CorporaBuilder::new("curriculum.tsv", "frequency.txt", "aoa.tsv")
//!     .build(35, Grade::First)?;
//! println!("{} known words", corpora.known_words().len());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod sources;
pub mod words;

pub use builder::{age_filtered_corpus, combined_corpus, frequency_corpus};
pub use config::{Grade, SessionConfig};
pub use error::{CorpusError, CorpusResult};
pub use models::{WordEntry, WordFilters};
pub use session::{Corpora, CorporaBuilder};
pub use words::{approximate_syllables, is_alphabetic, normalize_word};
