//! Curriculum table reading.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{CurriculumError, CurriculumResult};
use crate::models::{Curriculum, Lesson};

/// Outcome of loading a curriculum: the parsed lessons plus the indices of
/// rows that had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct CurriculumLoad {
    pub curriculum: Curriculum,
    /// Indices of malformed rows, in row order. Skipping leaves a gap at
    /// the index rather than renumbering later lessons.
    pub skipped: Vec<u32>,
}

impl CurriculumLoad {
    /// Whether any rows were skipped during loading.
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Reader for tabular curriculum sources.
///
/// The format is one row per lesson: the phonics rule, a tab, then the
/// comma-separated target words. Row position (1-based) is the lesson index.
pub struct CurriculumReader;

impl CurriculumReader {
    /// Read a curriculum from a tab-separated file.
    ///
    /// A missing file is fatal; malformed rows inside an existing file are
    /// skipped and reported via `CurriculumLoad::skipped`.
    pub fn read_file(path: impl AsRef<Path>) -> CurriculumResult<CurriculumLoad> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CurriculumError::SourceNotFound(path.to_path_buf()));
        }
        debug!("Reading curriculum from {:?}", path);

        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse a tabular curriculum source.
    ///
    /// Rows missing their rule or word list are skipped, loading continues,
    /// and the skipped indices are surfaced to the caller.
    pub fn parse(source: &str) -> CurriculumLoad {
        let mut load = CurriculumLoad::default();

        for (position, line) in source.lines().enumerate() {
            let index = (position + 1) as u32;
            match Self::parse_row(index, line) {
                Some(lesson) => {
                    load.curriculum.insert(lesson);
                }
                None => {
                    warn!("Skipping malformed lesson row {}", index);
                    load.skipped.push(index);
                }
            }
        }

        debug!(
            "Parsed {} lessons ({} rows skipped)",
            load.curriculum.len(),
            load.skipped.len()
        );
        load
    }

    /// Parse one row into a lesson, or `None` when the rule or word list
    /// is missing.
    fn parse_row(index: u32, line: &str) -> Option<Lesson> {
        let (rule, words_raw) = line.split_once('\t')?;
        let rule = rule.trim();
        if rule.is_empty() {
            return None;
        }

        let lesson = Lesson::new(index, rule).with_target_words(words_raw.split(','));
        if lesson.target_words.is_empty() {
            return None;
        }
        Some(lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_curriculum() {
        let source = "short a\tcat, mat, sat\nshort i\tsit, pit\n";
        let load = CurriculumReader::parse(source);

        assert!(!load.has_skipped());
        assert_eq!(load.curriculum.len(), 2);
        assert_eq!(load.curriculum.target_words(1).unwrap().len(), 3);
        assert!(load.curriculum.target_words(2).unwrap().contains("pit"));
    }

    #[test]
    fn test_parse_skips_malformed_rows() {
        // Row 2 has no word list, row 3 has no rule, row 4 is blank.
        let source = "short a\tcat, mat\nshort i\t\n\tsit\n\nshort e\tbed, red\n";
        let load = CurriculumReader::parse(source);

        assert_eq!(load.skipped, vec![2, 3, 4]);
        assert_eq!(load.curriculum.len(), 2);

        // The skipped rows leave gaps; review words honor the surviving indices.
        let review = load.curriculum.review_words(5);
        assert!(review.contains("cat"));
        assert!(!review.contains("bed"));
    }

    #[test]
    fn test_parse_lowercases_words() {
        let load = CurriculumReader::parse("short a\tCat, MAT\n");
        let words = load.curriculum.target_words(1).unwrap();
        assert!(words.contains("cat"));
        assert!(words.contains("mat"));
    }

    #[test]
    fn test_read_file_missing() {
        let err = CurriculumReader::read_file("/nonexistent/curriculum.tsv").unwrap_err();
        assert!(matches!(err, CurriculumError::SourceNotFound(_)));
    }
}
