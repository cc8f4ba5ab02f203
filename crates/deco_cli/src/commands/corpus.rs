//! Corpus command - build and print the combined word corpus.
//!
//! Unions the top frequency words with the readability-filtered
//! age-of-acquisition words, the base vocabulary handed to generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use deco_corpus::{
    age_filtered_corpus, combined_corpus, frequency_corpus, sources, WordFilters,
};

#[derive(Args)]
pub struct CorpusArgs {
    /// Ranked frequency word list (one word per line)
    #[arg(long, default_value = "data/frequency_words.txt")]
    frequency: PathBuf,

    /// Age-of-acquisition table (tab-separated)
    #[arg(long, default_value = "data/aoa_ratings.tsv")]
    aoa: PathBuf,

    /// How many top-ranked frequency words to keep
    #[arg(long, default_value_t = 100)]
    frequency_limit: usize,

    /// How many earliest-acquired words to consider before filtering
    #[arg(long, default_value_t = 300)]
    aoa_limit: usize,

    /// Column of the age rating in the AoA table
    #[arg(long, default_value_t = 4)]
    age_column: usize,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

pub async fn execute(args: CorpusArgs) -> Result<()> {
    let ranked = sources::read_frequency_list(&args.frequency)
        .context("Failed to read frequency list")?;
    let entries = sources::read_aoa_table(&args.aoa, args.age_column)
        .context("Failed to read age-of-acquisition table")?;

    let frequency_words = frequency_corpus(&ranked, args.frequency_limit);
    let aoa_words = age_filtered_corpus(&entries, args.aoa_limit, &WordFilters::default());

    info!(
        "Combining {} frequency words with {} age-filtered words",
        frequency_words.len(),
        aoa_words.len()
    );
    let combined = combined_corpus([frequency_words, aoa_words.into_iter().collect()]);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        for word in &combined {
            println!("{}", word);
        }
        println!();
        println!("Total combined words: {}", combined.len());
    }

    Ok(())
}
