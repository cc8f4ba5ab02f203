//! Lesson and curriculum data models.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{CurriculumError, CurriculumResult};

/// A single phonics lesson: an ordered curriculum unit pairing a rule with
/// the words that teach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Position in the curriculum. Positive and unique, but indices need
    /// not be contiguous.
    pub index: u32,
    /// Human-readable phonics rule, e.g. "short a".
    pub rule: String,
    /// Normalized words introduced by this lesson.
    pub target_words: BTreeSet<String>,
}

impl Lesson {
    /// Create a lesson with no target words yet.
    pub fn new(index: u32, rule: impl Into<String>) -> Self {
        Self {
            index,
            rule: rule.into(),
            target_words: BTreeSet::new(),
        }
    }

    /// Add target words, normalizing to lowercase.
    pub fn with_target_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.target_words.extend(
            words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }
}

/// An ordered table of phonics lessons keyed by lesson index.
///
/// "Previous" always means a strictly lower index, not row adjacency, so
/// curricula with gaps behave the same as contiguous ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Curriculum {
    lessons: BTreeMap<u32, Lesson>,
}

impl Curriculum {
    /// Create an empty curriculum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lesson, replacing any existing lesson with the same index.
    pub fn insert(&mut self, lesson: Lesson) -> Option<Lesson> {
        self.lessons.insert(lesson.index, lesson)
    }

    /// Look up a lesson by exact index.
    pub fn lesson(&self, index: u32) -> Option<&Lesson> {
        self.lessons.get(&index)
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether the curriculum has no lessons.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Iterate lessons in index order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.values()
    }

    /// Target words of one exact lesson.
    ///
    /// Fails with `UnknownLesson` rather than silently returning an empty
    /// set when the index does not exist.
    pub fn target_words(&self, index: u32) -> CurriculumResult<&BTreeSet<String>> {
        self.lessons
            .get(&index)
            .map(|lesson| &lesson.target_words)
            .ok_or(CurriculumError::UnknownLesson(index))
    }

    /// Cumulative review words: the union of target words over every lesson
    /// with a strictly lower index.
    ///
    /// Never fails; lessons with no predecessors get an empty set.
    pub fn review_words(&self, index: u32) -> BTreeSet<String> {
        self.lessons
            .range(..index)
            .flat_map(|(_, lesson)| lesson.target_words.iter().cloned())
            .collect()
    }
}
