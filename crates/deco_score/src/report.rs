//! Decodability score reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated classification of every token in a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Total tokens after normalization.
    pub total_words: usize,
    pub target_phonics_count: usize,
    pub known_count: usize,
    pub leftover_count: usize,
    /// Bucket shares as `count / total * 100`.
    pub target_phonics_pct: f64,
    pub known_pct: f64,
    pub leftover_pct: f64,
    /// Timestamp when the document was scored.
    pub evaluated_at: DateTime<Utc>,
}

impl ScoreReport {
    /// Build a report from bucket counts.
    ///
    /// An empty document yields zero percentages, not a division by zero.
    pub fn from_counts(target_phonics: usize, known: usize, leftover: usize) -> Self {
        let total = target_phonics + known + leftover;
        let pct = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            }
        };

        Self {
            total_words: total,
            target_phonics_count: target_phonics,
            known_count: known,
            leftover_count: leftover,
            target_phonics_pct: pct(target_phonics),
            known_pct: pct(known),
            leftover_pct: pct(leftover),
            evaluated_at: Utc::now(),
        }
    }

    /// Report for an empty document.
    pub fn empty() -> Self {
        Self::from_counts(0, 0, 0)
    }

    /// Human-readable one-line summary for terminal output.
    pub fn summary(&self) -> String {
        format!(
            "{} words | target phonics {:.2}% | known {:.2}% | leftover {:.2}%",
            self.total_words, self.target_phonics_pct, self.known_pct, self.leftover_pct
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_sum_to_hundred() {
        let report = ScoreReport::from_counts(3, 5, 2);
        assert_eq!(report.total_words, 10);
        let sum = report.target_phonics_pct + report.known_pct + report.leftover_pct;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report_is_all_zero() {
        let report = ScoreReport::empty();
        assert_eq!(report.total_words, 0);
        assert_eq!(report.target_phonics_pct, 0.0);
        assert_eq!(report.known_pct, 0.0);
        assert_eq!(report.leftover_pct, 0.0);
    }

    #[test]
    fn test_summary_formatting() {
        let report = ScoreReport::from_counts(1, 1, 2);
        let summary = report.summary();
        assert!(summary.contains("4 words"));
        assert!(summary.contains("25.00%"));
        assert!(summary.contains("50.00%"));
    }
}
