//! Raw word-data sources: frequency lists, age-of-acquisition tables, and
//! comma-delimited word lists.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CorpusError, CorpusResult};
use crate::models::WordEntry;
use crate::words::normalize_word;

/// Read a ranked frequency list: newline-delimited words, rank = line order.
pub fn read_frequency_list(path: impl AsRef<Path>) -> CorpusResult<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::SourceNotFound(path.to_path_buf()));
    }
    debug!("Reading frequency list from {:?}", path);

    let content = fs::read_to_string(path)?;
    Ok(parse_frequency_list(&content))
}

/// Parse a ranked frequency list, preserving line order.
pub fn parse_frequency_list(source: &str) -> Vec<String> {
    source
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Read an age-of-acquisition table: tab-separated rows with the word in
/// the first column and a numeric age in `age_column`.
pub fn read_aoa_table(path: impl AsRef<Path>, age_column: usize) -> CorpusResult<Vec<WordEntry>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::SourceNotFound(path.to_path_buf()));
    }
    debug!("Reading age-of-acquisition table from {:?}", path);

    let content = fs::read_to_string(path)?;
    Ok(parse_aoa_table(&content, age_column))
}

/// Parse an age-of-acquisition table.
///
/// Only the word column and the configured age column are read. The first
/// row is a header. Rows with a missing word or a non-numeric age are
/// skipped; raw psycholinguistic tables routinely carry such rows.
pub fn parse_aoa_table(source: &str, age_column: usize) -> Vec<WordEntry> {
    let mut entries = Vec::new();

    for (row, line) in source.lines().enumerate().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();

        let word = fields.first().map(|w| w.trim().to_lowercase());
        let age = fields.get(age_column).and_then(|v| v.trim().parse::<f64>().ok());

        match (word, age) {
            (Some(word), Some(age)) if !word.is_empty() => {
                entries.push(WordEntry::new(word, age));
            }
            _ => {
                debug!("Skipping unparsable age-of-acquisition row {}", row + 1);
            }
        }
    }

    entries
}

/// Read a comma-delimited word list (base/custom/mastered words).
pub fn read_word_list(path: impl AsRef<Path>) -> CorpusResult<BTreeSet<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::SourceNotFound(path.to_path_buf()));
    }
    debug!("Reading word list from {:?}", path);

    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse comma-delimited raw text into a normalized word set.
pub fn parse_word_list(source: &str) -> BTreeSet<String> {
    source
        .split(',')
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}
