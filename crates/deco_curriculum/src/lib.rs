//! # deco_curriculum
//!
//! Ordered phonics curriculum for DecoRead.
//!
//! This crate provides:
//! - **Lesson model**: a curriculum unit pairing a phonics rule with its
//!   explicit target words
//! - **Curriculum queries**: exact target-word lookup and cumulative
//!   review-word unions over all preceding lessons
//! - **Tabular reader**: parses curriculum tables, skipping malformed rows
//!   and reporting the skipped indices
//!
//! ## Example
//!
//! ```rust,ignore
//! use deco_curriculum::CurriculumReader;
//!
//! let load = CurriculumReader::read_file("data/curriculum.tsv")?;
//! let review = load.curriculum.review_words(35);
//! println!("{} review words before lesson 35", review.len());
//! ```

pub mod error;
pub mod models;
pub mod reader;

pub use error::{CurriculumError, CurriculumResult};
pub use models::{Curriculum, Lesson};
pub use reader::{CurriculumLoad, CurriculumReader};
