//! CLI command definitions.
//!
//! This module defines the command structure for the DecoRead CLI. Each
//! subcommand maps to one core workflow.

use clap::{Parser, Subcommand};

pub mod analyze;
pub mod corpus;
pub mod review_words;

/// DecoRead - decodable text corpora and scoring
#[derive(Parser)]
#[command(name = "deco")]
#[command(version, about = "DecoRead - decodable text corpora and scoring")]
#[command(long_about = r#"
DecoRead builds word corpora from phonics curricula, frequency lists, and
age-of-acquisition norms, then scores candidate early-reading texts against
them.

WORKFLOWS:
  analyze       → Score a story (or a directory of stories) against a lesson
  corpus        → Build and print the combined frequency + AoA word corpus
  review-words  → Print the cumulative review words for a lesson

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Decodability threshold failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one or more stories against a lesson's corpora
    Analyze(analyze::AnalyzeArgs),

    /// Build and print the combined word corpus
    Corpus(corpus::CorpusArgs),

    /// Print the cumulative review words for a lesson
    #[command(name = "review-words")]
    ReviewWords(review_words::ReviewWordsArgs),
}
