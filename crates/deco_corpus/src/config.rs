//! Session configuration: fry-word budgets, lesson phoneme targets, and
//! per-grade age-of-acquisition budgets.
//!
//! Historically these tables were hard-coded per script and disagreed with
//! each other. They are consolidated here into one explicit value with a
//! `Default` and a YAML override, so the grade-boundary choice is a
//! configuration input rather than a constant.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CorpusError, CorpusResult};
use crate::models::WordFilters;

/// Grade band for corpus sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Kindergarten,
    First,
    Second,
}

/// Age-of-acquisition budget used when a grade has no configured entry.
const FALLBACK_AOA_BUDGET: usize = 300;

/// Session-level corpus configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Fry-word budget by boundary lesson. The budget for a lesson is the
    /// entry at the greatest boundary not exceeding it.
    #[serde(default = "default_fry_limits")]
    pub fry_limits: BTreeMap<u32, usize>,

    /// Budget used for lessons before the first boundary.
    #[serde(default = "default_fry_limit")]
    pub default_fry_limit: usize,

    /// Target phoneme symbols by lesson.
    #[serde(default = "default_lesson_phonemes")]
    pub lesson_phonemes: BTreeMap<u32, Vec<String>>,

    /// Age-of-acquisition word budget per grade.
    #[serde(default = "default_aoa_budgets")]
    pub aoa_budgets: BTreeMap<Grade, usize>,

    /// Readability filters applied to age-of-acquisition words.
    #[serde(default)]
    pub filters: WordFilters,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fry_limits: default_fry_limits(),
            default_fry_limit: default_fry_limit(),
            lesson_phonemes: default_lesson_phonemes(),
            aoa_budgets: default_aoa_budgets(),
            filters: WordFilters::default(),
        }
    }
}

impl SessionConfig {
    /// Load a configuration override from a YAML file. Absent fields keep
    /// their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorpusError::SourceNotFound(path.to_path_buf()));
        }
        debug!("Reading session config from {:?}", path);

        let content = fs::read_to_string(path)?;
        let config: SessionConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Fry budget for a lesson: the entry at the greatest boundary that
    /// does not exceed it, or the default below the first boundary.
    pub fn fry_limit(&self, lesson: u32) -> usize {
        self.fry_limits
            .range(..=lesson)
            .next_back()
            .map(|(_, budget)| *budget)
            .unwrap_or(self.default_fry_limit)
    }

    /// Target phonemes for a lesson; empty when none are configured.
    pub fn target_phonemes(&self, lesson: u32) -> Vec<String> {
        self.lesson_phonemes.get(&lesson).cloned().unwrap_or_default()
    }

    /// Age-of-acquisition budget for a grade.
    pub fn aoa_budget(&self, grade: Grade) -> usize {
        self.aoa_budgets
            .get(&grade)
            .copied()
            .unwrap_or(FALLBACK_AOA_BUDGET)
    }
}

fn default_fry_limits() -> BTreeMap<u32, usize> {
    BTreeMap::from([(35, 40), (48, 60), (57, 80), (80, 120), (95, 240), (108, 240)])
}

fn default_fry_limit() -> usize {
    40
}

fn default_lesson_phonemes() -> BTreeMap<u32, Vec<String>> {
    BTreeMap::from([
        (35, vec!["AE1".to_string()]), // short a
        (36, vec!["IH1".to_string()]), // short i
        (37, vec!["AA1".to_string()]), // short o
        (39, vec!["AH1".to_string()]), // short u
        (40, vec!["EH1".to_string()]), // short e
    ])
}

fn default_aoa_budgets() -> BTreeMap<Grade, usize> {
    BTreeMap::from([
        (Grade::Kindergarten, 200),
        (Grade::First, 300),
        (Grade::Second, 400),
    ])
}
