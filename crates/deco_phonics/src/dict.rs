//! CMU-format pronunciation dictionary.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PhonicsError, PhonicsResult};

/// An ordered sequence of stress-marked phoneme symbols,
/// e.g. `["K", "EY1", "K"]` for "cake".
pub type PhonemeSeq = Vec<String>;

/// In-memory pronunciation dictionary mapping a normalized word to its
/// known pronunciation variants.
#[derive(Debug, Clone, Default)]
pub struct PronunciationDict {
    entries: HashMap<String, Vec<PhonemeSeq>>,
}

impl PronunciationDict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a dictionary from a CMU-format file.
    pub fn read_file(path: impl AsRef<Path>) -> PhonicsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PhonicsError::SourceNotFound(path.to_path_buf()));
        }
        debug!("Reading pronunciation dictionary from {:?}", path);

        let content = fs::read_to_string(path)?;
        let dict = Self::parse(&content);
        debug!("Loaded {} dictionary entries", dict.len());
        Ok(dict)
    }

    /// Parse CMU dictionary text: `;;;` comment lines, `WORD  PH PH PH`
    /// entries, `WORD(1)` markers for alternate pronunciations.
    pub fn parse(source: &str) -> Self {
        let mut dict = Self::new();

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(head) = parts.next() else {
                continue;
            };
            let phones: PhonemeSeq = parts.map(str::to_string).collect();
            if phones.is_empty() {
                continue;
            }

            dict.insert(strip_variant_marker(head), phones);
        }

        dict
    }

    /// Add one pronunciation variant for a word.
    pub fn insert(&mut self, word: &str, phones: PhonemeSeq) {
        self.entries
            .entry(word.trim().to_lowercase())
            .or_default()
            .push(phones);
    }

    /// Pronunciation variants for a word.
    ///
    /// Out-of-vocabulary words yield an empty slice, never an error.
    pub fn lookup(&self, word: &str) -> &[PhonemeSeq] {
        self.entries
            .get(&word.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the dictionary knows the word.
    pub fn contains(&self, word: &str) -> bool {
        !self.lookup(word).is_empty()
    }

    /// Number of words with at least one pronunciation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip the `(1)` alternate-pronunciation marker from an entry head.
fn strip_variant_marker(head: &str) -> &str {
    head.split_once('(').map(|(word, _)| word).unwrap_or(head)
}
