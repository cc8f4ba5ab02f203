//! Session corpora: built once from the raw tables, read-only thereafter.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use deco_curriculum::CurriculumReader;

use crate::builder::{age_filtered_corpus, frequency_corpus};
use crate::config::{Grade, SessionConfig};
use crate::error::CorpusResult;
use crate::sources;

/// Immutable word corpora for one scoring session.
///
/// Built once per session and passed by reference into scorer calls;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpora {
    /// Words the learner is assumed to read on sight: the early-acquired
    /// age-of-acquisition words plus any explicit mastered list.
    pub mastered_words: BTreeSet<String>,
    /// Cumulative target words from all earlier lessons.
    pub review_words: BTreeSet<String>,
    /// Target words of the current lesson.
    pub target_words: BTreeSet<String>,
    /// High-frequency (Fry) words within the lesson's budget.
    pub frequency_words: BTreeSet<String>,
}

impl Corpora {
    /// Every word the learner can be assumed to read: mastered, review,
    /// and budgeted frequency words.
    pub fn known_words(&self) -> BTreeSet<String> {
        self.mastered_words
            .iter()
            .chain(self.review_words.iter())
            .chain(self.frequency_words.iter())
            .cloned()
            .collect()
    }
}

/// Builder that loads every raw table exactly once and derives the session
/// corpora.
#[derive(Debug, Clone)]
pub struct CorporaBuilder {
    config: SessionConfig,
    curriculum_path: PathBuf,
    frequency_path: PathBuf,
    aoa_path: PathBuf,
    mastered_path: Option<PathBuf>,
    aoa_age_column: usize,
}

impl CorporaBuilder {
    /// Default column of the age rating in the AoA table.
    const DEFAULT_AGE_COLUMN: usize = 4;

    /// Create a builder over the three required sources.
    pub fn new(
        curriculum: impl Into<PathBuf>,
        frequency: impl Into<PathBuf>,
        aoa: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config: SessionConfig::default(),
            curriculum_path: curriculum.into(),
            frequency_path: frequency.into(),
            aoa_path: aoa.into(),
            mastered_path: None,
            aoa_age_column: Self::DEFAULT_AGE_COLUMN,
        }
    }

    /// Replace the default session configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add an explicit comma-delimited mastered word list.
    pub fn with_mastered_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.mastered_path = Some(path.into());
        self
    }

    /// Change the age column read from the AoA table.
    pub fn with_age_column(mut self, column: usize) -> Self {
        self.aoa_age_column = column;
        self
    }

    /// The active session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load every table once and derive the corpora for a lesson and grade.
    ///
    /// A missing source file is fatal; a lesson index absent from the
    /// curriculum surfaces as an `UnknownLesson` error rather than an empty
    /// target set.
    pub fn build(&self, lesson_index: u32, grade: Grade) -> CorpusResult<Corpora> {
        let load = CurriculumReader::read_file(&self.curriculum_path)?;
        if load.has_skipped() {
            warn!(
                "Curriculum loaded with {} skipped rows: {:?}",
                load.skipped.len(),
                load.skipped
            );
        }

        let target_words = load.curriculum.target_words(lesson_index)?.clone();
        let review_words = load.curriculum.review_words(lesson_index);

        let ranked = sources::read_frequency_list(&self.frequency_path)?;
        let fry_limit = self.config.fry_limit(lesson_index);
        let frequency_words: BTreeSet<String> =
            frequency_corpus(&ranked, fry_limit).into_iter().collect();

        let entries = sources::read_aoa_table(&self.aoa_path, self.aoa_age_column)?;
        let mut mastered_words = age_filtered_corpus(
            &entries,
            self.config.aoa_budget(grade),
            &self.config.filters,
        );

        if let Some(mastered_path) = &self.mastered_path {
            mastered_words.extend(sources::read_word_list(mastered_path)?);
        }

        info!(
            "Built corpora for lesson {}: {} target, {} review, {} frequency, {} mastered",
            lesson_index,
            target_words.len(),
            review_words.len(),
            frequency_words.len(),
            mastered_words.len()
        );

        Ok(Corpora {
            mastered_words,
            review_words,
            target_words,
            frequency_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words_union() {
        let corpora = Corpora {
            mastered_words: BTreeSet::from(["mom".to_string()]),
            review_words: BTreeSet::from(["cat".to_string(), "mom".to_string()]),
            target_words: BTreeSet::from(["sit".to_string()]),
            frequency_words: BTreeSet::from(["the".to_string()]),
        };

        let known = corpora.known_words();
        assert_eq!(known.len(), 3);
        assert!(known.contains("mom"));
        assert!(known.contains("cat"));
        assert!(known.contains("the"));
        // Target words are scored separately; they are not "known".
        assert!(!known.contains("sit"));
    }
}
