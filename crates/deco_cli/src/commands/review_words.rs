//! Review-words command - print the cumulative review words for a lesson.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use deco_curriculum::CurriculumReader;

#[derive(Args)]
pub struct ReviewWordsArgs {
    /// Lesson to query
    #[arg(short, long)]
    lesson: u32,

    /// Curriculum table (tab-separated: rule, comma-separated words)
    #[arg(long, default_value = "data/curriculum.tsv")]
    curriculum: PathBuf,

    /// Also print the lesson's own target words
    #[arg(long)]
    targets: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

pub async fn execute(args: ReviewWordsArgs) -> Result<()> {
    let load = CurriculumReader::read_file(&args.curriculum)
        .context("Failed to load curriculum")?;
    if load.has_skipped() {
        warn!("Skipped malformed curriculum rows: {:?}", load.skipped);
    }

    let review = load.curriculum.review_words(args.lesson);

    if args.format == "json" {
        let mut output = serde_json::json!({
            "lesson": args.lesson,
            "review_words": review,
        });
        if args.targets {
            let targets = load
                .curriculum
                .target_words(args.lesson)
                .with_context(|| format!("No lesson {} in the curriculum", args.lesson))?;
            output["target_words"] = serde_json::json!(targets);
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Review words before lesson {} ({} words):", args.lesson, review.len());
    for word in &review {
        println!("  {}", word);
    }

    if args.targets {
        let targets = load
            .curriculum
            .target_words(args.lesson)
            .with_context(|| format!("No lesson {} in the curriculum", args.lesson))?;
        println!();
        println!("Target words for lesson {}:", args.lesson);
        for word in targets {
            println!("  {}", word);
        }
    }

    Ok(())
}
